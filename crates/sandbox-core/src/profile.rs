//! Profile Store
//!
//! User record with a draft-based edit lifecycle:
//!
//! ```text
//! Viewing --begin_edit--> Editing --start_save--> Saving --finish_save--> Viewing
//!                            |
//!                            +-------cancel-----> Viewing
//! ```
//!
//! The draft is only writable while Editing, so the record committed by a save
//! is exactly the draft captured when the save started.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of roles a profile may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Developer,
    Tester,
    Manager,
    Designer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Developer, Role::Tester, Role::Manager, Role::Designer];

    /// Lowercase form, used as the option value
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Tester => "tester",
            Role::Manager => "manager",
            Role::Designer => "designer",
        }
    }

    /// Capitalised form, used as the option label
    pub fn label(&self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Tester => "Tester",
            Role::Manager => "Manager",
            Role::Designer => "Designer",
        }
    }
}

impl FromStr for Role {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ProfileError::InvalidRole(s.to_string()))
    }
}

/// Editable fields of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Role,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Role,
        ProfileField::Bio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Role => "role",
            ProfileField::Bio => "bio",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email",
            ProfileField::Role => "Role",
            ProfileField::Bio => "Bio",
        }
    }
}

impl FromStr for ProfileField {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ProfileError::UnknownField(s.to_string()))
    }
}

/// The user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub bio: String,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: Role::Developer,
            bio: "Passionate about testing and automation".to_string(),
        }
    }
}

impl ProfileRecord {
    /// Text of one field as shown in the page
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Role => self.role.as_str(),
            ProfileField::Bio => &self.bio,
        }
    }

    /// Set one field from raw input. Role must be one of the known roles.
    pub fn set(&mut self, field: ProfileField, value: &str) -> Result<(), ProfileError> {
        match field {
            ProfileField::Name => self.name = value.to_string(),
            ProfileField::Email => self.email = value.to_string(),
            ProfileField::Role => self.role = value.parse()?,
            ProfileField::Bio => self.bio = value.to_string(),
        }
        Ok(())
    }
}

/// Lifecycle state of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing,
    Saving,
}

/// Draft captured when a save starts; consumed when it completes
#[derive(Debug, PartialEq, Eq)]
pub struct SaveTicket {
    draft: ProfileRecord,
}

impl SaveTicket {
    pub fn draft(&self) -> &ProfileRecord {
        &self.draft
    }
}

/// Profile-level errors. Never shown to the user; the view logs and drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    NotEditing,
    SaveInProgress,
    InvalidRole(String),
    UnknownField(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NotEditing => write!(f, "Profile is not being edited"),
            ProfileError::SaveInProgress => write!(f, "A save is already in progress"),
            ProfileError::InvalidRole(role) => write!(f, "Invalid role: {}", role),
            ProfileError::UnknownField(field) => write!(f, "Unknown profile field: {}", field),
        }
    }
}

impl std::error::Error for ProfileError {}

/// Committed record plus the optional draft being edited
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileStore {
    committed: ProfileRecord,
    draft: Option<ProfileRecord>,
    state: EditState,
}

impl ProfileStore {
    pub fn new(record: ProfileRecord) -> Self {
        Self {
            committed: record,
            draft: None,
            state: EditState::Viewing,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// True while the form shows inputs (editing or saving)
    pub fn is_editing(&self) -> bool {
        self.state != EditState::Viewing
    }

    pub fn is_saving(&self) -> bool {
        self.state == EditState::Saving
    }

    /// The authoritative record
    pub fn committed(&self) -> &ProfileRecord {
        &self.committed
    }

    pub fn draft(&self) -> Option<&ProfileRecord> {
        self.draft.as_ref()
    }

    /// What the page shows: the draft if there is one, else the committed record
    pub fn current(&self) -> &ProfileRecord {
        self.draft.as_ref().unwrap_or(&self.committed)
    }

    /// Viewing -> Editing, snapshotting the committed record.
    /// Returns false (and changes nothing) in any other state.
    pub fn begin_edit(&mut self) -> bool {
        if self.state != EditState::Viewing {
            return false;
        }
        self.draft = Some(self.committed.clone());
        self.state = EditState::Editing;
        tracing::debug!("[profile] editing");
        true
    }

    /// Change one draft field. Only allowed while Editing.
    pub fn update_field(&mut self, field: ProfileField, value: &str) -> Result<(), ProfileError> {
        if self.state != EditState::Editing {
            return Err(ProfileError::NotEditing);
        }
        match self.draft.as_mut() {
            Some(draft) => draft.set(field, value),
            None => Err(ProfileError::NotEditing),
        }
    }

    /// Editing -> Viewing, dropping the draft. No-op while Saving.
    pub fn cancel(&mut self) -> bool {
        if self.state != EditState::Editing {
            return false;
        }
        self.draft = None;
        self.state = EditState::Viewing;
        tracing::debug!("[profile] edit cancelled");
        true
    }

    /// Editing -> Saving. The ticket carries the draft as it is right now.
    pub fn start_save(&mut self) -> Result<SaveTicket, ProfileError> {
        match self.state {
            EditState::Viewing => Err(ProfileError::NotEditing),
            EditState::Saving => Err(ProfileError::SaveInProgress),
            EditState::Editing => {
                let draft = self.draft.clone().ok_or(ProfileError::NotEditing)?;
                self.state = EditState::Saving;
                tracing::debug!("[profile] saving");
                Ok(SaveTicket { draft })
            }
        }
    }

    /// Saving -> Viewing, committing the ticket's draft.
    /// Returns false if no save is pending.
    pub fn finish_save(&mut self, ticket: SaveTicket) -> bool {
        if self.state != EditState::Saving {
            return false;
        }
        self.committed = ticket.draft;
        self.draft = None;
        self.state = EditState::Viewing;
        tracing::info!("[profile] saved {}", self.committed.email);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing() -> ProfileStore {
        let mut store = ProfileStore::default();
        assert!(store.begin_edit());
        store
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("tester".parse::<Role>(), Ok(Role::Tester));
        assert_eq!(
            "Tester".parse::<Role>(),
            Err(ProfileError::InvalidRole("Tester".to_string()))
        );
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("bio".parse::<ProfileField>(), Ok(ProfileField::Bio));
        assert!(matches!("age".parse::<ProfileField>(), Err(ProfileError::UnknownField(_))));
    }

    #[test]
    fn test_begin_edit_snapshots_committed() {
        let store = editing();
        assert_eq!(store.state(), EditState::Editing);
        assert_eq!(store.draft(), Some(store.committed()));
    }

    #[test]
    fn test_update_only_touches_draft() {
        let mut store = editing();
        store.update_field(ProfileField::Name, "Jane").unwrap();

        assert_eq!(store.current().name, "Jane");
        assert_eq!(store.committed().name, "John Doe");
    }

    #[test]
    fn test_cancel_reverts() {
        let mut store = editing();
        store.update_field(ProfileField::Name, "Jane").unwrap();
        assert!(store.cancel());

        assert_eq!(store.state(), EditState::Viewing);
        assert_eq!(store.draft(), None);
        assert_eq!(store.current().name, "John Doe");
    }

    #[test]
    fn test_update_rejected_when_viewing() {
        let mut store = ProfileStore::default();
        assert_eq!(
            store.update_field(ProfileField::Bio, "x"),
            Err(ProfileError::NotEditing)
        );
        assert_eq!(store, ProfileStore::default());
    }

    #[test]
    fn test_invalid_role_leaves_draft_unchanged() {
        let mut store = editing();
        assert_eq!(
            store.update_field(ProfileField::Role, "admin"),
            Err(ProfileError::InvalidRole("admin".to_string()))
        );
        assert_eq!(store.current().role, Role::Developer);

        store.update_field(ProfileField::Role, "manager").unwrap();
        assert_eq!(store.current().role, Role::Manager);
    }

    #[test]
    fn test_save_commits_captured_draft() {
        let mut store = editing();
        store.update_field(ProfileField::Email, "jane@example.com").unwrap();

        let ticket = store.start_save().unwrap();
        assert_eq!(store.state(), EditState::Saving);
        assert_eq!(ticket.draft().email, "jane@example.com");

        // draft is frozen while saving
        assert_eq!(
            store.update_field(ProfileField::Email, "late@example.com"),
            Err(ProfileError::NotEditing)
        );
        assert!(!store.cancel());
        assert!(!store.begin_edit());

        assert!(store.finish_save(ticket));
        assert_eq!(store.state(), EditState::Viewing);
        assert_eq!(store.committed().email, "jane@example.com");
        assert_eq!(store.draft(), None);
    }

    #[test]
    fn test_second_start_save_rejected() {
        let mut store = editing();
        let _ticket = store.start_save().unwrap();
        assert_eq!(store.start_save(), Err(ProfileError::SaveInProgress));
    }

    #[test]
    fn test_start_save_requires_editing() {
        let mut store = ProfileStore::default();
        assert_eq!(store.start_save(), Err(ProfileError::NotEditing));
    }

    #[test]
    fn test_finish_save_without_pending_save() {
        let mut source = editing();
        let ticket = source.start_save().unwrap();

        let mut other = ProfileStore::default();
        assert!(!other.finish_save(ticket));
        assert_eq!(other, ProfileStore::default());
    }

    #[test]
    fn test_begin_edit_twice_keeps_draft() {
        let mut store = editing();
        store.update_field(ProfileField::Name, "Jane").unwrap();
        assert!(!store.begin_edit());
        assert_eq!(store.current().name, "Jane");
    }
}
