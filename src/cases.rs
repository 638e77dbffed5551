use bevy::prelude::*;

/// A consultation case as presented on the patient screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatientCase {
    pub name: &'static str,
    pub symptoms: &'static str,
}

pub const CASES: [PatientCase; 4] = [
    PatientCase {
        name: "John Doe",
        symptoms: "Fièvre, toux",
    },
    PatientCase {
        name: "Jeanne Dupont",
        symptoms: "Maux de tête, vertiges",
    },
    PatientCase {
        name: "Luc Moreau",
        symptoms: "Douleur thoracique, essoufflement",
    },
    PatientCase {
        name: "Emma Petit",
        symptoms: "Éruption cutanée, démangeaisons",
    },
];

/// The case on the examination table for the current ward visit.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ActiveCase(pub PatientCase);

impl Default for ActiveCase {
    fn default() -> Self {
        ActiveCase(CASES[0])
    }
}

/// Draws a fresh case every time the ward is entered.
pub fn draw_case(mut active: ResMut<ActiveCase>) {
    active.0 = CASES[rand::random_range(0..CASES.len())];
    info!("consultation du jour: {}", active.0.name);
}
