use crate::buffs::ConsumableInventory;
use crate::goals::GoalRecord;
use crate::record::StatLedger;
use crate::upgrades::UpgradeLedger;
use crate::wallet::Wallet;
use serde::{Deserialize, Serialize};

/// Everything that outlives an app session. Running activities, fever and
/// active buffs are transient and never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub player_id: String,
    /// Unix seconds (UTC) when the snapshot was taken.
    pub last_save_time: i64,
    pub wallet: Wallet,
    pub ledger: StatLedger,
    pub missions: Vec<GoalRecord>,
    pub achievements: Vec<GoalRecord>,
    pub upgrades: UpgradeLedger,
    pub inventory: ConsumableInventory,
}
