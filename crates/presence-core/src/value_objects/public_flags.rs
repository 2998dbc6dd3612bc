//! Public user flags as reported by Discord
//!
//! The proxy passes `publicFlags` through as a plain integer; this type decodes
//! it into the badges a profile card can show.

use bitflags::bitflags;

bitflags! {
    /// Discord public flags (the subset that is visible on a profile)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PublicFlags: u64 {
        const STAFF                    = 1 << 0;
        const PARTNER                  = 1 << 1;
        const HYPESQUAD                = 1 << 2;
        const BUG_HUNTER_LEVEL_1       = 1 << 3;
        const HYPESQUAD_ONLINE_HOUSE_1 = 1 << 6;
        const HYPESQUAD_ONLINE_HOUSE_2 = 1 << 7;
        const HYPESQUAD_ONLINE_HOUSE_3 = 1 << 8;
        const PREMIUM_EARLY_SUPPORTER  = 1 << 9;
        const TEAM_PSEUDO_USER         = 1 << 10;
        const BUG_HUNTER_LEVEL_2       = 1 << 14;
        const VERIFIED_BOT             = 1 << 16;
        const VERIFIED_DEVELOPER       = 1 << 17;
        const CERTIFIED_MODERATOR      = 1 << 18;
        const BOT_HTTP_INTERACTIONS    = 1 << 19;
        const ACTIVE_DEVELOPER         = 1 << 22;
    }
}

impl PublicFlags {
    /// Human readable badge labels, in bit order
    pub fn badge_labels(&self) -> Vec<&'static str> {
        const LABELS: [(PublicFlags, &str); 14] = [
            (PublicFlags::STAFF, "Discord Staff"),
            (PublicFlags::PARTNER, "Partnered Server Owner"),
            (PublicFlags::HYPESQUAD, "HypeSquad Events"),
            (PublicFlags::BUG_HUNTER_LEVEL_1, "Bug Hunter"),
            (PublicFlags::HYPESQUAD_ONLINE_HOUSE_1, "HypeSquad Bravery"),
            (PublicFlags::HYPESQUAD_ONLINE_HOUSE_2, "HypeSquad Brilliance"),
            (PublicFlags::HYPESQUAD_ONLINE_HOUSE_3, "HypeSquad Balance"),
            (PublicFlags::PREMIUM_EARLY_SUPPORTER, "Early Supporter"),
            (PublicFlags::BUG_HUNTER_LEVEL_2, "Bug Hunter Gold"),
            (PublicFlags::VERIFIED_BOT, "Verified Bot"),
            (PublicFlags::VERIFIED_DEVELOPER, "Early Verified Bot Developer"),
            (PublicFlags::CERTIFIED_MODERATOR, "Moderator Programs Alumni"),
            (PublicFlags::BOT_HTTP_INTERACTIONS, "HTTP Interactions Bot"),
            (PublicFlags::ACTIVE_DEVELOPER, "Active Developer"),
        ];

        LABELS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, label)| *label)
            .collect()
    }
}
