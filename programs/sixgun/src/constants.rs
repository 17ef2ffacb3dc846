pub const SESSION_SEED: &[u8] = b"session";
pub const VAULT_SEED: &[u8] = b"vault";

// cylinder configuration; lethal count must stay in 1..=CHAMBER_COUNT
pub const CHAMBER_COUNT: usize = 6;
pub const LETHAL_CHAMBERS: usize = 1;
