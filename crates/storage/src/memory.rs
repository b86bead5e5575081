use std::cell::{Cell, RefCell};

use log::debug;
use repforge_domain as domain;

use crate::record::Profile;

/// Profile repository keeping the profile as a serialized JSON document.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: RefCell<Option<String>>,
    disconnected: Cell<bool>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_json(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
            disconnected: Cell::new(false),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    pub fn set_connected(&self, connected: bool) {
        self.disconnected.set(!connected);
    }

    fn check_connection(&self) -> Result<(), domain::StorageError> {
        if self.disconnected.get() {
            return Err(domain::StorageError::NoConnection);
        }
        Ok(())
    }
}

impl domain::ProfileRepository for MemoryStorage {
    async fn read_profile(&self) -> Result<domain::Profile, domain::ReadError> {
        self.check_connection()?;

        let Some(document) = self.to_json() else {
            debug!("no profile stored, using default profile");
            return Ok(domain::Profile::default());
        };
        let record = serde_json::from_str::<Profile>(&document)
            .map_err(|err| domain::ReadError::Other(Box::new(err)))?;

        domain::Profile::try_from(record).map_err(|err| domain::ReadError::Other(Box::new(err)))
    }

    async fn write_profile(
        &self,
        profile: domain::Profile,
    ) -> Result<domain::Profile, domain::UpdateError> {
        self.check_connection()?;

        let document = serde_json::to_string(&Profile::from(&profile))
            .map_err(|err| domain::UpdateError::Other(Box::new(err)))?;
        *self.document.borrow_mut() = Some(document);

        Ok(profile)
    }
}
