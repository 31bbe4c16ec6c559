//! Shared Tailwind class fragments

/// Page background and base text color
pub const APP_BACKGROUND: &str = "bg-[#1A1A2E] text-white";

/// Orange-to-yellow brand gradient used on primary actions
pub const BRAND_GRADIENT: &str = "bg-gradient-to-r from-[#FF8C42] to-[#FFD93D] hover:from-[#FF7A30] hover:to-[#FFC71B] text-[#1A1A2E]";

/// Static gradient for avatars and badges (no hover state)
pub const BRAND_BADGE: &str = "bg-gradient-to-br from-[#FF8C42] to-[#FFD93D] text-[#1A1A2E]";

/// Translucent card surface
pub const GLASS_CARD: &str = "bg-white/5 backdrop-blur border border-white/10 rounded-2xl";

/// Screen content column
pub const SCREEN_COLUMN: &str = "max-w-2xl mx-auto";
