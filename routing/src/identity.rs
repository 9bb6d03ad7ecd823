use std::time::SystemTime;

use ring::{Polynomial, Ring};
use sampling::source::Source;
use utils::Map;

use crate::errors::RoutingError;

/// Device-held identity: the real name never leaves this struct, the relay
/// only ever sees `polynomial_id`, and the name-to-identity contact map is
/// device-local.
///
/// `polynomial_id` is a fresh uniformly random ring element, so it carries
/// no derivable link to the real identity, and rotation replaces it
/// wholesale (no proof linking old and new is produced here).
#[derive(Debug)]
pub struct Identity {
    real_identity: String,
    polynomial_id: Polynomial,
    created_at: SystemTime,
    contacts: Map<String, Polynomial>,
}

impl Identity {
    /// Draws a fresh random polynomial id for `real_identity`. The password
    /// is required for the (external) encrypted local store; it is only
    /// validated here, never retained.
    pub fn create(
        ring: &Ring,
        source: &mut Source,
        real_identity: &str,
        password: &str,
    ) -> Result<Identity, RoutingError> {
        if real_identity.is_empty() {
            return Err(RoutingError::EmptyIdentity);
        }
        if password.is_empty() {
            return Err(RoutingError::EmptyPassword);
        }
        Ok(Identity {
            real_identity: real_identity.to_string(),
            polynomial_id: ring.random(source),
            created_at: SystemTime::now(),
            contacts: Map::new(),
        })
    }

    pub fn real_identity(&self) -> &str {
        &self.real_identity
    }

    pub fn polynomial_id(&self) -> &Polynomial {
        &self.polynomial_id
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Redraws the polynomial id; the old value and its timestamp are
    /// discarded.
    pub fn rotate(&mut self, ring: &Ring, source: &mut Source) {
        self.polynomial_id = ring.random(source);
        self.created_at = SystemTime::now();
    }

    /// Inserts or overwrites a contact.
    pub fn add_contact(
        &mut self,
        name: &str,
        their_polynomial: Polynomial,
    ) -> Result<(), RoutingError> {
        if name.is_empty() {
            return Err(RoutingError::EmptyContactName);
        }
        self.contacts.insert(name.to_string(), their_polynomial);
        Ok(())
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<(), RoutingError> {
        self.contacts
            .remove(&name.to_string())
            .map(|_| ())
            .ok_or_else(|| RoutingError::ContactNotFound(name.to_string()))
    }

    pub fn lookup_contact_polynomial(&self, name: &str) -> Result<Polynomial, RoutingError> {
        self.contacts
            .get(&name.to_string())
            .cloned()
            .ok_or_else(|| RoutingError::ContactNotFound(name.to_string()))
    }

    /// All contact names, in no particular order.
    pub fn list_contacts(&self) -> Vec<String> {
        self.contacts.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring::RingParams;

    fn fixture() -> (Ring, Source) {
        (Ring::new(RingParams::small()), Source::new([9u8; 32]))
    }

    #[test]
    fn create_requires_identity_and_password() {
        let (ring, mut source) = fixture();
        assert_eq!(
            Identity::create(&ring, &mut source, "", "pw").unwrap_err(),
            RoutingError::EmptyIdentity
        );
        assert_eq!(
            Identity::create(&ring, &mut source, "alice", "").unwrap_err(),
            RoutingError::EmptyPassword
        );
        let id: Identity = Identity::create(&ring, &mut source, "alice", "pw").unwrap();
        assert_eq!(id.real_identity(), "alice");
        assert_eq!(id.polynomial_id().len(), 64);
    }

    #[test]
    fn rotate_replaces_polynomial_id() {
        let (ring, mut source) = fixture();
        let mut id: Identity = Identity::create(&ring, &mut source, "alice", "pw").unwrap();
        let before: Polynomial = id.polynomial_id().clone();
        id.rotate(&ring, &mut source);
        assert_ne!(id.polynomial_id(), &before);
    }

    #[test]
    fn distinct_identities_are_unlinkable_values() {
        let (ring, mut source) = fixture();
        let a: Identity = Identity::create(&ring, &mut source, "alice", "pw").unwrap();
        let b: Identity = Identity::create(&ring, &mut source, "alice", "pw").unwrap();
        assert_ne!(a.polynomial_id(), b.polynomial_id());
    }

    #[test]
    fn contact_lifecycle() {
        let (ring, mut source) = fixture();
        let mut id: Identity = Identity::create(&ring, &mut source, "alice", "pw").unwrap();
        let bob: Polynomial = ring.random(&mut source);

        assert_eq!(
            id.add_contact("", bob.clone()).unwrap_err(),
            RoutingError::EmptyContactName
        );
        id.add_contact("bob", bob.clone()).unwrap();
        assert_eq!(id.lookup_contact_polynomial("bob").unwrap(), bob);
        assert_eq!(id.list_contacts(), vec!["bob".to_string()]);

        // Overwrite keeps a single entry.
        let bob2: Polynomial = ring.random(&mut source);
        id.add_contact("bob", bob2.clone()).unwrap();
        assert_eq!(id.lookup_contact_polynomial("bob").unwrap(), bob2);
        assert_eq!(id.list_contacts().len(), 1);

        id.remove_contact("bob").unwrap();
        assert_eq!(
            id.remove_contact("bob").unwrap_err(),
            RoutingError::ContactNotFound("bob".to_string())
        );
        assert_eq!(
            id.lookup_contact_polynomial("bob").unwrap_err(),
            RoutingError::ContactNotFound("bob".to_string())
        );
        assert!(id.list_contacts().is_empty());
    }
}
