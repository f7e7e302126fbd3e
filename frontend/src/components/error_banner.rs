use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

const AUTO_DISMISS_MS: u32 = 6000;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Invoked on manual dismiss and on auto-dismiss; the owner clears the
    /// error state it rendered the banner from.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(
            move || dismiss.emit(()),
            if props.auto_dismiss { AUTO_DISMISS_MS } else { 0 },
        )
    };

    // Restart the countdown whenever a new message arrives.
    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (props.message.clone(), props.auto_dismiss),
            move |(_message, auto_dismiss)| {
                if *auto_dismiss {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() {
        return Html::default();
    }

    let close_click = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!(
                "flex",
                "items-start",
                "gap-3",
                "rounded-xl",
                "border",
                "border-red-500/40",
                "bg-red-500/10",
                "px-4",
                "py-3",
                "text-sm",
                "text-red-700",
                "dark:text-red-200",
                "w-full"
            )}
            role="alert"
            aria-live="assertive"
        >
            <span aria-hidden="true">{"⚠️"}</span>
            <div class={classes!("flex-1", "space-y-1")}>
                <p class={classes!("font-semibold")}>{"Something went wrong"}</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class={classes!(
                    "inline-flex",
                    "h-6",
                    "w-6",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "text-lg",
                    "leading-none",
                    "hover:bg-black/10",
                    "dark:hover:bg-white/15",
                    "transition-colors"
                )}
                aria-label="Dismiss error"
                onclick={close_click}
            >
                {"×"}
            </button>
        </div>
    }
}
