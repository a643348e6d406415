use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour of a metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Bad,
}

impl StatTone {
    /// Positive values are good, negative ones bad
    pub fn from_sign(is_negative: bool) -> Self {
        if is_negative {
            StatTone::Bad
        } else {
            StatTone::Good
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Visual status
    #[prop(into, optional)]
    tone: Signal<StatTone>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let tone_class = move || match tone.get() {
        StatTone::Good => "stat-card stat-card--success",
        StatTone::Bad => "stat-card stat-card--error",
        StatTone::Neutral => "stat-card",
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=tone_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
