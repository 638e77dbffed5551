use bevy::prelude::*;
use strum_macros::Display;

/// Stable handle to an account in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Role {
    #[strum(serialize = "medecin")]
    Medecin,
}

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    password: String,
    pub points: u32,
    pub role: Role,
}

/// Why a sign-in or registration attempt was refused. `message` is the
/// user-facing line shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    BadCredentials,
    EmailTaken,
    MissingField,
}

impl AuthError {
    pub fn message(self) -> &'static str {
        match self {
            AuthError::BadCredentials => "Email ou mot de passe incorrect",
            AuthError::EmailTaken => "Un compte existe déjà avec cet email",
            AuthError::MissingField => "Veuillez remplir tous les champs",
        }
    }
}

/// In-process account directory. Stands in for the hosted user store the
/// deployed game talks to; everything here is session-local.
#[derive(Resource, Debug)]
pub struct Accounts {
    users: Vec<Account>,
    next_id: u32,
}

impl Default for Accounts {
    fn default() -> Self {
        let mut accounts = Accounts {
            users: Vec::new(),
            next_id: 0,
        };

        // Demo staff so the leaderboard has faces on a fresh run
        for (name, email, points) in [
            ("Dr. Lambert", "lambert@clinique.fr", 45),
            ("Dr. Moreau", "moreau@clinique.fr", 30),
            ("Interne Roux", "roux@clinique.fr", 10),
        ] {
            let id = accounts.insert(name, email, "hippocrate");
            accounts.award_points(id, points);
        }

        accounts
    }
}

impl Accounts {
    fn insert(&mut self, name: &str, email: &str, password: &str) -> AccountId {
        let id = AccountId(self.next_id);
        self.next_id += 1;
        self.users.push(Account {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            points: 0,
            role: Role::Medecin,
        });
        id
    }

    /// New accounts start at zero points, as medecin.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AccountId, AuthError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }
        if self.users.iter().any(|user| user.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let id = self.insert(name, email, password);
        info!("nouveau compte: {} ({})", email, Role::Medecin);
        Ok(id)
    }

    /// The failure is deliberately opaque: wrong email and wrong password
    /// read the same from outside.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<AccountId, AuthError> {
        self.users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .map(|user| user.id)
            .ok_or(AuthError::BadCredentials)
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn award_points(&mut self, id: AccountId, points: u32) {
        if let Some(user) = self.users.iter_mut().find(|user| user.id == id) {
            user.points += points;
        }
    }

    /// All accounts, best score first.
    pub fn leaderboard(&self) -> Vec<&Account> {
        let mut ranked: Vec<&Account> = self.users.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked
    }
}

/// The signed-in account, if any.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ActiveAccount(pub Option<AccountId>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_sign_in_round_trips() {
        let mut accounts = Accounts::default();
        let id = accounts
            .register("Dr. Test", "test@clinique.fr", "secret")
            .unwrap();
        assert_eq!(accounts.sign_in("test@clinique.fr", "secret"), Ok(id));
        assert_eq!(accounts.get(id).unwrap().points, 0);
        assert_eq!(accounts.get(id).unwrap().role, Role::Medecin);
    }

    #[test]
    fn wrong_password_and_unknown_email_fail_the_same_way() {
        let mut accounts = Accounts::default();
        accounts
            .register("Dr. Test", "test@clinique.fr", "secret")
            .unwrap();
        assert_eq!(
            accounts.sign_in("test@clinique.fr", "wrong"),
            Err(AuthError::BadCredentials)
        );
        assert_eq!(
            accounts.sign_in("nobody@clinique.fr", "secret"),
            Err(AuthError::BadCredentials)
        );
    }

    #[test]
    fn duplicate_email_is_refused() {
        let mut accounts = Accounts::default();
        accounts
            .register("Dr. Test", "test@clinique.fr", "secret")
            .unwrap();
        assert_eq!(
            accounts.register("Autre", "test@clinique.fr", "autre"),
            Err(AuthError::EmailTaken)
        );
    }

    #[test]
    fn empty_fields_are_refused() {
        let mut accounts = Accounts::default();
        assert_eq!(
            accounts.register("", "test@clinique.fr", "secret"),
            Err(AuthError::MissingField)
        );
        assert_eq!(
            accounts.register("Dr. Test", "  ", "secret"),
            Err(AuthError::MissingField)
        );
        assert_eq!(
            accounts.register("Dr. Test", "test@clinique.fr", ""),
            Err(AuthError::MissingField)
        );
    }

    #[test]
    fn points_accumulate_across_awards() {
        let mut accounts = Accounts::default();
        let id = accounts
            .register("Dr. Test", "test@clinique.fr", "secret")
            .unwrap();
        accounts.award_points(id, 10);
        accounts.award_points(id, 5);
        assert_eq!(accounts.get(id).unwrap().points, 15);
    }

    #[test]
    fn leaderboard_ranks_best_score_first() {
        let mut accounts = Accounts::default();
        let id = accounts
            .register("Dr. Test", "test@clinique.fr", "secret")
            .unwrap();
        accounts.award_points(id, 100);

        let ranked = accounts.leaderboard();
        assert_eq!(ranked.first().unwrap().id, id);
        assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].points >= pair[1].points)
        );
    }

    #[test]
    fn directory_is_seeded_with_demo_staff() {
        let accounts = Accounts::default();
        assert!(!accounts.leaderboard().is_empty());
        assert!(accounts.sign_in("lambert@clinique.fr", "hippocrate").is_ok());
    }
}
