/// Navigation icons. Unknown or missing keys fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteIcon {
    Dashboard,
    Briefcase,
    Link,
    Layers,
    Users,
    Chart,
    Settings,
    Default,
}

impl RouteIcon {
    pub fn from_key(key: Option<&str>) -> Self {
        let Some(key) = key else { return RouteIcon::Default };
        match key.trim().to_ascii_lowercase().as_str() {
            "dashboard" | "home" => RouteIcon::Dashboard,
            "briefcase" | "deals" => RouteIcon::Briefcase,
            "link" | "relationships" => RouteIcon::Link,
            "layers" | "services" => RouteIcon::Layers,
            "users" | "people" => RouteIcon::Users,
            "chart" | "reports" => RouteIcon::Chart,
            "settings" | "cog" => RouteIcon::Settings,
            _ => RouteIcon::Default,
        }
    }

    fn name(self) -> &'static str {
        match self {
            RouteIcon::Dashboard => "dashboard",
            RouteIcon::Briefcase => "briefcase",
            RouteIcon::Link => "link",
            RouteIcon::Layers => "layers",
            RouteIcon::Users => "users",
            RouteIcon::Chart => "chart",
            RouteIcon::Settings => "settings",
            RouteIcon::Default => "default",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            RouteIcon::Dashboard => "\u{25A6}",
            RouteIcon::Briefcase => "\u{1F4BC}",
            RouteIcon::Link => "\u{1F517}",
            RouteIcon::Layers => "\u{2630}",
            RouteIcon::Users => "\u{1F465}",
            RouteIcon::Chart => "\u{1F4C8}",
            RouteIcon::Settings => "\u{2699}",
            RouteIcon::Default => "\u{2022}",
        }
    }

    pub fn render(self) -> String {
        format!(r#"<span class="icon icon-{}" aria-hidden="true">{}</span>"#, self.name(), self.glyph())
    }
}
