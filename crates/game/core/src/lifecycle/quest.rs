use crate::config::GameConfig;
use crate::error::CombatError;
use crate::identity::ContentId;
use crate::state::{AbilityId, Level, Loadout, PlayerId, QuestId};

/// A deferred boss battle.
///
/// Records the loadout and level at start; once the chain height reaches
/// `unlock_height` it can be finalized into a boss battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Quest {
    pub level: Level,
    pub player: PlayerId,
    pub loadout: Loadout,
    /// Height at which the quest was started.
    pub started_at: u64,
    pub unlock_height: u64,
}

impl Quest {
    pub fn new(
        level: Level,
        player: PlayerId,
        loadout: &[AbilityId],
        started_at: u64,
        game: &GameConfig,
    ) -> Result<Self, CombatError> {
        Ok(Self {
            level,
            player,
            loadout: Loadout::new(loadout)?,
            started_at,
            unlock_height: started_at.saturating_add(game.quest_duration),
        })
    }

    pub fn id(&self) -> QuestId {
        QuestId(self.content_id())
    }

    pub const fn is_ready(&self, height: u64) -> bool {
        height >= self.unlock_height
    }
}

impl ContentId for Quest {}
