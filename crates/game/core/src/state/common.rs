use std::fmt;

use sha2::{Digest, Sha256};

macro_rules! digest_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub [u8; 32]);

        impl $name {
            pub const fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for byte in &self.0 {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // First 4 bytes are enough to tell ids apart in logs.
                write!(f, "{}(", stringify!($name))?;
                for byte in &self.0[..4] {
                    write!(f, "{byte:02x}")?;
                }
                write!(f, "..)")
            }
        }
    };
}

digest_id! {
    /// Content hash of an [`Ability`](super::Ability).
    ///
    /// Identical abilities share one id, so owning "the same" ability twice is
    /// an owned-count of two rather than two distinct entries.
    AbilityId
}

digest_id! {
    /// Content hash of a [`BattleConfig`](super::BattleConfig).
    ///
    /// Identical configs collide on purpose: starting the same battle twice
    /// looks up the one already running.
    BattleId
}

digest_id! {
    /// Content hash of a [`Quest`](crate::lifecycle::Quest).
    QuestId
}

digest_id! {
    /// Public identifier of a player.
    PlayerId
}

impl PlayerId {
    /// Derives a player id from an arbitrary public key or handle.
    pub fn from_public_key(key: &[u8]) -> Self {
        Self(Sha256::digest(key).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_full_lowercase_hex() {
        let id = AbilityId([0x0f; 32]);
        assert_eq!(id.to_string(), "0f".repeat(32));
    }

    #[test]
    fn debug_is_abbreviated() {
        let id = BattleId([0xab; 32]);
        assert_eq!(format!("{id:?}"), "BattleId(abababab..)");
    }

    #[test]
    fn player_id_from_key_is_sha256() {
        let id = PlayerId::from_public_key(b"alice");
        assert_eq!(
            hex::encode(id.as_bytes()),
            "2bd806c97f0e00af1a1fc3328fa763a9269723c8db8fac4f93af71db186d6e90"
        );
    }
}
