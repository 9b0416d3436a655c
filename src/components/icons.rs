//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuLink as Link, LuLogIn as SignIn, LuLogOut as SignOut, LuMessageSquare as Comment,
        LuPlus as Plus, LuStore as Shop, LuTrash2 as Trash, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowInRight as SignIn, BsBoxArrowRight as SignOut, BsChatDots as Comment,
        BsLink45deg as Link, BsPerson as User, BsPlusLg as Plus, BsShop as Shop,
        BsTrash as Trash,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SHOP, Shop);
themed_icon!(USER, User);
themed_icon!(PLUS, Plus);
themed_icon!(SIGN_IN, SignIn);
themed_icon!(SIGN_OUT, SignOut);
themed_icon!(COMMENT, Comment);
themed_icon!(LINK, Link);
themed_icon!(TRASH, Trash);
