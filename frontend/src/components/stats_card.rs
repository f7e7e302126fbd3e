use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub icon: String,
    pub value: String,
    pub label: String,
    #[prop_or_default]
    pub accent: bool,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    let value_classes = classes!(
        "stats-card-value",
        "text-2xl",
        "font-bold",
        if props.accent { "text-[var(--primary)]" } else { "text-[var(--text)]" }
    );

    html! {
        <div
            class={classes!(
                "stats-card",
                "flex-1",
                "rounded-xl",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "p-6",
                "shadow-sm"
            )}
            role="status"
        >
            <span class="stats-card-icon text-xl" aria-hidden="true">{ props.icon.clone() }</span>
            <strong class={value_classes}>{ props.value.clone() }</strong>
            <div class={classes!("text-sm", "text-[var(--muted)]", "mt-1")}>
                { props.label.clone() }
            </div>
        </div>
    }
}
