use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    #[prop_or(AttrValue::from("Delete"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or(false)]
    pub busy: bool,
}

/// Modal confirmation for destructive actions. The backdrop and the cancel
/// button both dismiss; confirm is disabled while the action is in flight.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        let busy = props.busy;
        Callback::from(move |_| {
            if !busy {
                on_cancel.emit(());
            }
        })
    };

    let stop_bubble = Callback::from(|event: MouseEvent| event.stop_propagation());

    let confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };

    let cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-[100]",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/60",
                "p-4",
                "backdrop-blur-sm"
            )}
            role="dialog"
            aria-modal="true"
            onclick={on_backdrop_click}
        >
            <div
                class={classes!(
                    "w-full",
                    "max-w-md",
                    "rounded-2xl",
                    "border",
                    "border-[var(--border)]",
                    "bg-[var(--surface)]",
                    "p-6",
                    "shadow-xl"
                )}
                onclick={stop_bubble}
            >
                <h2 class={classes!("text-xl", "font-bold", "text-[var(--text)]", "mb-2")}>
                    { props.title.clone() }
                </h2>
                <p class={classes!("text-sm", "text-[var(--muted)]", "mb-6")}>
                    { props.message.clone() }
                </p>
                <div class={classes!("flex", "justify-end", "gap-3")}>
                    <button
                        type="button"
                        class={classes!(
                            "px-4",
                            "py-2",
                            "rounded-lg",
                            "border",
                            "border-[var(--border)]",
                            "text-sm",
                            "font-semibold",
                            "text-[var(--text)]",
                            "hover:bg-[var(--surface-alt)]",
                            "transition-colors"
                        )}
                        disabled={props.busy}
                        onclick={cancel_click}
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="button"
                        class={classes!(
                            "px-4",
                            "py-2",
                            "rounded-lg",
                            "bg-red-600",
                            "text-white",
                            "text-sm",
                            "font-semibold",
                            "hover:bg-red-700",
                            "transition-colors",
                            "disabled:opacity-50",
                            "disabled:cursor-not-allowed"
                        )}
                        disabled={props.busy}
                        onclick={confirm_click}
                    >
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
