use yew::prelude::*;

/// Icon tags used by the content tables. Views resolve them with [`icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Globe,
    Code,
    Smartphone,
    Cuboid,
    Palette,
    Zap,
    Filter,
    ShoppingCart,
    Database,
    Shield,
    Search,
    BarChart,
    MessageSquare,
    Clock,
    Users,
    Dollar,
    Calendar,
    Calculator,
    Check,
    Plus,
    Minus,
    Close,
    ArrowRight,
    ArrowLeft,
    Upload,
    Phone,
    Mail,
    MapPin,
    Award,
    Star,
    Play,
    Pause,
    Maximize,
    Minimize,
    Sparkles,
    Alert,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Globe => "🌐",
            Icon::Code => "💻",
            Icon::Smartphone => "📱",
            Icon::Cuboid => "🧊",
            Icon::Palette => "🎨",
            Icon::Zap => "⚡",
            Icon::Filter => "🔎",
            Icon::ShoppingCart => "🛒",
            Icon::Database => "🗄️",
            Icon::Shield => "🛡️",
            Icon::Search => "🔍",
            Icon::BarChart => "📊",
            Icon::MessageSquare => "💬",
            Icon::Clock => "⏰",
            Icon::Users => "👥",
            Icon::Dollar => "💲",
            Icon::Calendar => "📅",
            Icon::Calculator => "🧮",
            Icon::Check => "✔",
            Icon::Plus => "+",
            Icon::Minus => "−",
            Icon::Close => "✕",
            Icon::ArrowRight => "→",
            Icon::ArrowLeft => "←",
            Icon::Upload => "📤",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::MapPin => "📍",
            Icon::Award => "🏆",
            Icon::Star => "⭐",
            Icon::Play => "▶",
            Icon::Pause => "⏸",
            Icon::Maximize => "⤢",
            Icon::Minimize => "⤡",
            Icon::Sparkles => "✨",
            Icon::Alert => "⚠️",
        }
    }
}

pub fn icon(kind: Icon) -> Html {
    html! { <span class="icon" aria-hidden="true">{kind.glyph()}</span> }
}
