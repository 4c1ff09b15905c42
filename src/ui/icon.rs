use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under `/icons`, without the `.svg` extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP: &str = "arrow-up";
    pub const CALENDAR: &str = "calendar";
    pub const CHAT: &str = "chat";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CLOCK: &str = "clock";
    pub const GLOBE: &str = "globe";
    pub const LIGHTNING: &str = "lightning";
    pub const LINK: &str = "link";
    pub const MENU: &str = "menu";
    pub const SEARCH: &str = "search";
    pub const SHIELD: &str = "shield";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
}
