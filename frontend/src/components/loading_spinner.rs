use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 36,
            SpinnerSize::Large => 52,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Optional visible caption under the spinner; screen readers always
    /// get a label.
    #[prop_or_default]
    pub label: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let dimension = props.size.dimension();
    let style = format!("width:{dimension}px;height:{dimension}px;");

    html! {
        <div
            class={classes!("flex", "flex-col", "items-center", "justify-center", "gap-3", "p-6")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={style}
                class={classes!(
                    "rounded-full",
                    "border-2",
                    "border-[var(--border)]",
                    "border-t-[var(--primary)]",
                    "animate-spin"
                )}
            />
            {
                if let Some(label) = props.label.clone() {
                    html! { <span class={classes!("text-sm", "text-[var(--muted)]")}>{ label }</span> }
                } else {
                    html! { <span class={classes!("sr-only")}>{ "Loading..." }</span> }
                }
            }
        </div>
    }
}
