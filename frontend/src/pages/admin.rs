use std::collections::HashSet;

use js_sys::Date;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use ema_admin_shared::{
    filter_and_sort, parse_likes, AdminError, BoardStats, EmaDraft, EmaRecord, EmaSort, Selection,
};

use crate::{
    api::{delete_ema, fetch_emas, update_ema, EmaUpdateRequest},
    components::{
        confirm_dialog::ConfirmDialog,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
        stats_card::StatsCard,
    },
    hooks::use_pagination,
    session::SessionState,
};

const PAGE_SIZE: usize = 20;

fn format_ms(ts_ms: i64) -> String {
    if ts_ms == 0 {
        return "-".to_string();
    }
    let d = Date::new(&wasm_bindgen::JsValue::from_f64(ts_ms as f64));
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        d.get_full_year(),
        d.get_month() + 1, // JS months are 0-indexed
        d.get_date(),
        d.get_hours(),
        d.get_minutes(),
        d.get_seconds(),
    )
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let session = use_state(SessionState::restore);
    let password_input = use_state(String::new);

    let emas = use_state(Vec::<EmaRecord>::new);
    let loading = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    let search_term = use_state(String::new);
    let sort_by = use_state(EmaSort::default);

    let edit_draft = use_state(|| None::<EmaDraft>);
    let delete_confirm = use_state(|| None::<String>);
    let bulk_confirm = use_state(|| false);
    let selection = use_state(Selection::default);

    // In-flight guards so rapid repeated clicks cannot double-submit.
    let saving = use_state(|| false);
    let deleting = use_state(|| false);
    // Request sequence guard to avoid a stale fetch overriding a newer one.
    let fetch_seq = use_mut_ref(|| 0_u64);

    let refresh_emas = {
        let emas = emas.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let fetch_seq = fetch_seq.clone();
        Callback::from(move |_: ()| {
            let emas = emas.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let fetch_seq = fetch_seq.clone();
            let request_id = {
                let mut seq = fetch_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_emas().await {
                    Ok(records) => {
                        if *fetch_seq.borrow() != request_id {
                            return;
                        }
                        emas.set(records);
                        load_error.set(None);
                    },
                    Err(err) => {
                        if *fetch_seq.borrow() != request_id {
                            return;
                        }
                        web_sys::console::error_1(&format!("Fetch failed: {}", err).into());
                        // Keep the current list; only surface the notice.
                        load_error.set(Some(err.to_string()));
                    },
                }
                if *fetch_seq.borrow() != request_id {
                    return;
                }
                loading.set(false);
            });
        })
    };

    // First fetch once the gate opens, and again after every re-login.
    {
        let refresh_emas = refresh_emas.clone();
        use_effect_with(session.is_authenticated(), move |authenticated| {
            if *authenticated {
                refresh_emas.emit(());
            }
            || ()
        });
    }

    let on_password_input = {
        let password_input = password_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                password_input.set(target.value());
            }
        })
    };

    let on_login = {
        let session = session.clone();
        let password_input = password_input.clone();
        let load_error = load_error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match SessionState::attempt_login(&password_input) {
                Ok(next) => {
                    session.set(next);
                    password_input.set(String::new());
                    load_error.set(None);
                },
                Err(err) => {
                    load_error.set(Some(err.to_string()));
                    password_input.set(String::new());
                },
            }
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            session.set(SessionState::logged_out());
        })
    };

    let on_refresh_click = {
        let refresh_emas = refresh_emas.clone();
        Callback::from(move |_| refresh_emas.emit(()))
    };

    let on_search_change = {
        let search_term = search_term.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_term.set(target.value());
            }
        })
    };

    let on_sort_change = {
        let sort_by = sort_by.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                sort_by.set(EmaSort::parse(&target.value()));
            }
        })
    };

    let on_toggle_select = {
        let selection = selection.clone();
        Callback::from(move |id: String| {
            let mut next = (*selection).clone();
            next.toggle(&id);
            selection.set(next);
        })
    };

    let on_edit_start = {
        let edit_draft = edit_draft.clone();
        let saving = saving.clone();
        Callback::from(move |record: EmaRecord| {
            // Opening another edit replaces the current draft, but never
            // while a save is in flight.
            if *saving {
                return;
            }
            edit_draft.set(Some(EmaDraft::seeded_from(&record)));
        })
    };

    let on_draft_wish_change = {
        let edit_draft = edit_draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*edit_draft).clone();
                if let Some(draft) = next.as_mut() {
                    draft.wish = target.value();
                }
                edit_draft.set(next);
            }
        })
    };

    let on_draft_name_change = {
        let edit_draft = edit_draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*edit_draft).clone();
                if let Some(draft) = next.as_mut() {
                    draft.name = target.value();
                }
                edit_draft.set(next);
            }
        })
    };

    let on_draft_likes_change = {
        let edit_draft = edit_draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*edit_draft).clone();
                if let Some(draft) = next.as_mut() {
                    draft.likes = target.value();
                }
                edit_draft.set(next);
            }
        })
    };

    let on_edit_cancel = {
        let edit_draft = edit_draft.clone();
        Callback::from(move |_: MouseEvent| edit_draft.set(None))
    };

    let on_edit_save = {
        let edit_draft = edit_draft.clone();
        let saving = saving.clone();
        let load_error = load_error.clone();
        let notice = notice.clone();
        let refresh_emas = refresh_emas.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(draft) = (*edit_draft).clone() else {
                return;
            };
            if *saving {
                return;
            }
            saving.set(true);
            let request = EmaUpdateRequest {
                wish: draft.wish.clone(),
                name: draft.name.clone(),
                likes: parse_likes(&draft.likes),
            };
            let edit_draft = edit_draft.clone();
            let saving = saving.clone();
            let load_error = load_error.clone();
            let notice = notice.clone();
            let refresh_emas = refresh_emas.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match update_ema(&draft.id, &request).await {
                    Ok(()) => {
                        edit_draft.set(None);
                        load_error.set(None);
                        notice.set(Some("Ema updated".to_string()));
                        refresh_emas.emit(());
                    },
                    Err(err) => {
                        // Draft stays open with its values intact.
                        web_sys::console::error_1(&format!("Update failed: {}", err).into());
                        load_error.set(Some(err.to_string()));
                    },
                }
                saving.set(false);
            });
        })
    };

    let on_delete_request = {
        let delete_confirm = delete_confirm.clone();
        Callback::from(move |id: String| {
            delete_confirm.set(Some(id));
        })
    };

    let on_delete_cancel = {
        let delete_confirm = delete_confirm.clone();
        Callback::from(move |_: ()| delete_confirm.set(None))
    };

    let on_delete_confirm = {
        let delete_confirm = delete_confirm.clone();
        let deleting = deleting.clone();
        let emas = emas.clone();
        let selection = selection.clone();
        let load_error = load_error.clone();
        let notice = notice.clone();
        Callback::from(move |_: ()| {
            let Some(id) = (*delete_confirm).clone() else {
                return;
            };
            if *deleting {
                return;
            }
            deleting.set(true);
            let delete_confirm = delete_confirm.clone();
            let deleting = deleting.clone();
            let emas = emas.clone();
            let selection = selection.clone();
            let load_error = load_error.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_ema(&id).await {
                    Ok(()) => {
                        let remaining: Vec<EmaRecord> = emas
                            .iter()
                            .filter(|record| record.id != id)
                            .cloned()
                            .collect();
                        emas.set(remaining);
                        let mut next = (*selection).clone();
                        next.remove(&id);
                        selection.set(next);
                        delete_confirm.set(None);
                        load_error.set(None);
                        notice.set(Some("Ema deleted".to_string()));
                    },
                    Err(err) => {
                        // Local state is untouched; the confirmation stays
                        // open so the admin can retry or cancel.
                        web_sys::console::error_1(&format!("Delete failed: {}", err).into());
                        load_error.set(Some(err.to_string()));
                    },
                }
                deleting.set(false);
            });
        })
    };

    let on_bulk_request = {
        let selection = selection.clone();
        let bulk_confirm = bulk_confirm.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            if selection.is_empty() {
                notice.set(Some("Select emas to delete first".to_string()));
                return;
            }
            bulk_confirm.set(true);
        })
    };

    let on_bulk_cancel = {
        let bulk_confirm = bulk_confirm.clone();
        Callback::from(move |_: ()| bulk_confirm.set(false))
    };

    let on_bulk_confirm = {
        let bulk_confirm = bulk_confirm.clone();
        let deleting = deleting.clone();
        let emas = emas.clone();
        let selection = selection.clone();
        let load_error = load_error.clone();
        let notice = notice.clone();
        Callback::from(move |_: ()| {
            if *deleting {
                return;
            }
            let ids = selection.to_vec();
            if ids.is_empty() {
                bulk_confirm.set(false);
                return;
            }
            deleting.set(true);
            let bulk_confirm = bulk_confirm.clone();
            let deleting = deleting.clone();
            let emas = emas.clone();
            let selection = selection.clone();
            let load_error = load_error.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // One delete per id, all in flight at once; report only
                // after every sub-delete has settled.
                let results =
                    futures::future::join_all(ids.iter().map(|id| delete_ema(id))).await;
                let failed = results.iter().filter(|result| result.is_err()).count();
                if failed == 0 {
                    let removed: HashSet<String> = ids.iter().cloned().collect();
                    let remaining: Vec<EmaRecord> = emas
                        .iter()
                        .filter(|record| !removed.contains(&record.id))
                        .cloned()
                        .collect();
                    emas.set(remaining);
                    selection.set(Selection::default());
                    load_error.set(None);
                    notice.set(Some(format!("Deleted {} emas", ids.len())));
                } else {
                    // All-or-nothing at the UI level: some deletes may have
                    // landed remotely, but the list and selection are left
                    // untouched until the admin refreshes.
                    let err = AdminError::PartialBulkFailure {
                        failed,
                        total: ids.len(),
                    };
                    web_sys::console::error_1(&format!("Bulk delete failed: {}", err).into());
                    load_error.set(Some(err.to_string()));
                }
                bulk_confirm.set(false);
                deleting.set(false);
            });
        })
    };

    let on_dismiss_error = {
        let load_error = load_error.clone();
        Callback::from(move |_: ()| load_error.set(None))
    };

    let on_dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| notice.set(None))
    };

    // Derived view state; stats always come from the unfiltered list.
    let view = filter_and_sort(&emas, &search_term, *sort_by);
    let stats = BoardStats::collect(&emas);
    let view_ids: Vec<String> = view.iter().map(|record| record.id.clone()).collect();
    let all_selected = !view.is_empty() && selection.len() == view.len();
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(view.clone(), PAGE_SIZE);

    let on_select_all = {
        let selection = selection.clone();
        let view_ids = view_ids.clone();
        Callback::from(move |_: Event| {
            let mut next = (*selection).clone();
            next.select_all_or_none(&view_ids);
            selection.set(next);
        })
    };

    if !session.is_authenticated() {
        return html! {
            <main class={classes!(
                "min-h-screen",
                "flex",
                "items-center",
                "justify-center",
                "bg-[var(--bg)]",
                "px-4"
            )}>
                <div class={classes!(
                    "w-full",
                    "max-w-md",
                    "rounded-2xl",
                    "border",
                    "border-[var(--border)]",
                    "bg-[var(--surface)]",
                    "p-8",
                    "shadow-xl"
                )}>
                    <h1 class={classes!("text-3xl", "font-bold", "text-center", "mb-6", "text-[var(--text)]")}>
                        { "Admin Login" }
                    </h1>
                    {
                        if let Some(message) = (*load_error).clone() {
                            html! {
                                <div class={classes!("mb-4")}>
                                    <ErrorBanner
                                        message={message}
                                        on_close={Some(on_dismiss_error.clone())}
                                    />
                                </div>
                            }
                        } else {
                            Html::default()
                        }
                    }
                    <form onsubmit={on_login}>
                        <label class={classes!("block", "text-sm", "font-medium", "text-[var(--muted)]", "mb-2")}
                            for="admin-password">
                            { "Password" }
                        </label>
                        <input
                            id="admin-password"
                            type="password"
                            value={(*password_input).clone()}
                            oninput={on_password_input}
                            placeholder="Enter password"
                            class={classes!(
                                "w-full",
                                "px-4",
                                "py-2",
                                "mb-4",
                                "rounded-lg",
                                "border",
                                "border-[var(--border)]",
                                "bg-[var(--surface)]",
                                "text-[var(--text)]",
                                "outline-none",
                                "focus:border-[var(--primary)]",
                                "transition-colors"
                            )}
                        />
                        <button
                            type="submit"
                            class={classes!(
                                "w-full",
                                "py-2",
                                "px-4",
                                "rounded-lg",
                                "bg-[var(--primary)]",
                                "text-white",
                                "font-medium",
                                "hover:opacity-90",
                                "transition-opacity"
                            )}
                        >
                            { "Log in" }
                        </button>
                    </form>
                </div>
            </main>
        };
    }

    html! {
        <main class={classes!("min-h-screen", "bg-[var(--bg)]", "pb-16")}>
            <div class={classes!("container", "mx-auto", "px-4", "py-8", "max-w-7xl")}>
                // Header
                <div class={classes!(
                    "rounded-xl",
                    "border",
                    "border-[var(--border)]",
                    "bg-[var(--surface)]",
                    "p-6",
                    "mb-6",
                    "flex",
                    "flex-col",
                    "sm:flex-row",
                    "justify-between",
                    "items-start",
                    "sm:items-center",
                    "gap-4"
                )}>
                    <div>
                        <h1 class={classes!("text-3xl", "font-bold", "text-[var(--text)]", "mb-1")}>
                            { "Ema Admin" }
                        </h1>
                        <p class={classes!("text-[var(--muted)]")}>
                            { "Edit and delete wish-board entries" }
                        </p>
                    </div>
                    <div class={classes!("flex", "gap-2")}>
                        <button
                            type="button"
                            onclick={on_refresh_click}
                            disabled={*loading}
                            class={classes!(
                                "px-4",
                                "py-2",
                                "rounded-lg",
                                "bg-[var(--primary)]",
                                "text-white",
                                "font-medium",
                                "hover:opacity-90",
                                "transition-opacity",
                                "disabled:opacity-50"
                            )}
                        >
                            { "Refresh" }
                        </button>
                        <button
                            type="button"
                            onclick={on_logout}
                            class={classes!(
                                "px-4",
                                "py-2",
                                "rounded-lg",
                                "border",
                                "border-[var(--border)]",
                                "text-[var(--text)]",
                                "font-medium",
                                "hover:bg-[var(--surface-alt)]",
                                "transition-colors"
                            )}
                        >
                            { "Log out" }
                        </button>
                    </div>
                </div>

                {
                    if let Some(message) = (*load_error).clone() {
                        html! {
                            <div class={classes!("mb-4")}>
                                <ErrorBanner
                                    message={message}
                                    on_close={Some(on_dismiss_error.clone())}
                                />
                            </div>
                        }
                    } else {
                        Html::default()
                    }
                }

                {
                    if let Some(message) = (*notice).clone() {
                        html! {
                            <div
                                class={classes!(
                                    "mb-4",
                                    "flex",
                                    "items-center",
                                    "gap-3",
                                    "rounded-xl",
                                    "border",
                                    "border-emerald-500/40",
                                    "bg-emerald-500/10",
                                    "px-4",
                                    "py-3",
                                    "text-sm",
                                    "text-emerald-700",
                                    "dark:text-emerald-200"
                                )}
                                role="status"
                            >
                                <span class={classes!("flex-1")}>{ message }</span>
                                <button
                                    type="button"
                                    class={classes!("text-lg", "leading-none")}
                                    aria-label="Dismiss notice"
                                    onclick={on_dismiss_notice}
                                >
                                    {"×"}
                                </button>
                            </div>
                        }
                    } else {
                        Html::default()
                    }
                }

                // Board statistics, always over the full list
                <div class={classes!("flex", "flex-col", "md:flex-row", "gap-4", "mb-6")}>
                    <StatsCard
                        icon={"🎋".to_string()}
                        value={stats.total.to_string()}
                        label={"Total emas".to_string()}
                    />
                    <StatsCard
                        icon={"❤️".to_string()}
                        value={stats.total_likes.to_string()}
                        label={"Total likes".to_string()}
                        accent=true
                    />
                    <StatsCard
                        icon={"🦊".to_string()}
                        value={stats.with_character.to_string()}
                        label={"With character".to_string()}
                    />
                </div>

                // Toolbar: search, sort, bulk actions
                <div class={classes!(
                    "rounded-xl",
                    "border",
                    "border-[var(--border)]",
                    "bg-[var(--surface)]",
                    "p-4",
                    "mb-6",
                    "flex",
                    "flex-col",
                    "md:flex-row",
                    "md:items-center",
                    "gap-3"
                )}>
                    <input
                        type="search"
                        value={(*search_term).clone()}
                        oninput={on_search_change}
                        placeholder="Search wish, name, or character"
                        class={classes!(
                            "flex-1",
                            "px-4",
                            "py-2",
                            "rounded-lg",
                            "border",
                            "border-[var(--border)]",
                            "bg-[var(--surface)]",
                            "text-[var(--text)]",
                            "outline-none",
                            "focus:border-[var(--primary)]",
                            "transition-colors"
                        )}
                    />
                    <select
                        onchange={on_sort_change}
                        class={classes!(
                            "px-3",
                            "py-2",
                            "rounded-lg",
                            "border",
                            "border-[var(--border)]",
                            "bg-[var(--surface)]",
                            "text-[var(--text)]"
                        )}
                    >
                        <option value="newest" selected={*sort_by == EmaSort::Newest}>{ "Newest first" }</option>
                        <option value="oldest" selected={*sort_by == EmaSort::Oldest}>{ "Oldest first" }</option>
                        <option value="likes" selected={*sort_by == EmaSort::Likes}>{ "Most liked" }</option>
                    </select>
                    <label class={classes!("flex", "items-center", "gap-2", "text-sm", "text-[var(--muted)]")}>
                        <input
                            type="checkbox"
                            checked={all_selected}
                            onchange={on_select_all}
                        />
                        { format!("Select all ({})", view.len()) }
                    </label>
                    <button
                        type="button"
                        onclick={on_bulk_request}
                        disabled={*deleting}
                        class={classes!(
                            "px-4",
                            "py-2",
                            "rounded-lg",
                            "bg-red-600",
                            "text-white",
                            "font-medium",
                            "hover:bg-red-700",
                            "transition-colors",
                            "disabled:opacity-50"
                        )}
                    >
                        { format!("Delete selected ({})", selection.len()) }
                    </button>
                </div>

                {
                    if *loading {
                        html! {
                            <LoadingSpinner
                                size={SpinnerSize::Large}
                                label={Some("Loading emas...".to_string())}
                            />
                        }
                    } else if emas.is_empty() {
                        html! {
                            <div class={classes!(
                                "rounded-xl",
                                "border",
                                "border-[var(--border)]",
                                "bg-[var(--surface)]",
                                "p-12",
                                "text-center",
                                "text-[var(--muted)]"
                            )}>
                                { "No emas on the board yet." }
                            </div>
                        }
                    } else if view.is_empty() {
                        html! {
                            <div class={classes!(
                                "rounded-xl",
                                "border",
                                "border-[var(--border)]",
                                "bg-[var(--surface)]",
                                "p-12",
                                "text-center",
                                "text-[var(--muted)]"
                            )}>
                                { "No emas match your search." }
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <div class={classes!("flex", "flex-col", "gap-3")}>
                                    { for visible.iter().map(|record| html! {
                                        <EmaRow
                                            key={record.id.clone()}
                                            record={record.clone()}
                                            selected={selection.contains(&record.id)}
                                            draft={(*edit_draft).clone().filter(|draft| draft.id == record.id)}
                                            saving={*saving}
                                            on_toggle_select={on_toggle_select.clone()}
                                            on_edit_start={on_edit_start.clone()}
                                            on_edit_save={on_edit_save.clone()}
                                            on_edit_cancel={on_edit_cancel.clone()}
                                            on_draft_wish_change={on_draft_wish_change.clone()}
                                            on_draft_name_change={on_draft_name_change.clone()}
                                            on_draft_likes_change={on_draft_likes_change.clone()}
                                            on_delete_request={on_delete_request.clone()}
                                        />
                                    }) }
                                </div>
                                <div class={classes!("mt-6", "flex", "justify-center")}>
                                    <Pagination
                                        current_page={current_page}
                                        total_pages={total_pages}
                                        on_page_change={go_to_page.clone()}
                                    />
                                </div>
                            </>
                        }
                    }
                }
            </div>

            {
                if (*delete_confirm).is_some() {
                    html! {
                        <ConfirmDialog
                            title={"Delete this ema?".to_string()}
                            message={"The entry will be permanently removed from the board. This cannot be undone.".to_string()}
                            busy={*deleting}
                            on_confirm={on_delete_confirm.clone()}
                            on_cancel={on_delete_cancel.clone()}
                        />
                    }
                } else {
                    Html::default()
                }
            }

            {
                if *bulk_confirm {
                    html! {
                        <ConfirmDialog
                            title={"Delete selected emas?".to_string()}
                            message={format!(
                                "{} emas will be permanently removed from the board. This cannot be undone.",
                                selection.len()
                            )}
                            confirm_label={AttrValue::from(format!("Delete {}", selection.len()))}
                            busy={*deleting}
                            on_confirm={on_bulk_confirm.clone()}
                            on_cancel={on_bulk_cancel.clone()}
                        />
                    }
                } else {
                    Html::default()
                }
            }
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct EmaRowProps {
    pub record: EmaRecord,
    pub selected: bool,
    /// `Some` when this row owns the single open edit session.
    pub draft: Option<EmaDraft>,
    pub saving: bool,
    pub on_toggle_select: Callback<String>,
    pub on_edit_start: Callback<EmaRecord>,
    pub on_edit_save: Callback<MouseEvent>,
    pub on_edit_cancel: Callback<MouseEvent>,
    pub on_draft_wish_change: Callback<InputEvent>,
    pub on_draft_name_change: Callback<InputEvent>,
    pub on_draft_likes_change: Callback<InputEvent>,
    pub on_delete_request: Callback<String>,
}

#[function_component(EmaRow)]
fn ema_row(props: &EmaRowProps) -> Html {
    let record = &props.record;
    let id = record.id.clone();

    let toggle = {
        let on_toggle_select = props.on_toggle_select.clone();
        let id = id.clone();
        Callback::from(move |_: Event| on_toggle_select.emit(id.clone()))
    };

    let edit = {
        let on_edit_start = props.on_edit_start.clone();
        let record = record.clone();
        Callback::from(move |_: MouseEvent| on_edit_start.emit(record.clone()))
    };

    let delete = {
        let on_delete_request = props.on_delete_request.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| on_delete_request.emit(id.clone()))
    };

    let row_classes = classes!(
        "rounded-xl",
        "border",
        "bg-[var(--surface)]",
        "p-4",
        "flex",
        "flex-col",
        "gap-3",
        if props.selected { "border-[var(--primary)]" } else { "border-[var(--border)]" }
    );

    if let Some(draft) = props.draft.as_ref() {
        return html! {
            <div class={row_classes}>
                <div class={classes!("flex", "flex-col", "gap-3")}>
                    <textarea
                        value={draft.wish.clone()}
                        oninput={props.on_draft_wish_change.clone()}
                        rows="3"
                        placeholder="Wish"
                        class={classes!(
                            "w-full",
                            "px-3",
                            "py-2",
                            "rounded-lg",
                            "border",
                            "border-[var(--border)]",
                            "bg-[var(--surface)]",
                            "text-[var(--text)]",
                            "outline-none",
                            "focus:border-[var(--primary)]"
                        )}
                    />
                    <div class={classes!("flex", "flex-col", "sm:flex-row", "gap-3")}>
                        <input
                            type="text"
                            value={draft.name.clone()}
                            oninput={props.on_draft_name_change.clone()}
                            placeholder="Name"
                            class={classes!(
                                "flex-1",
                                "px-3",
                                "py-2",
                                "rounded-lg",
                                "border",
                                "border-[var(--border)]",
                                "bg-[var(--surface)]",
                                "text-[var(--text)]",
                                "outline-none",
                                "focus:border-[var(--primary)]"
                            )}
                        />
                        <input
                            type="number"
                            min="0"
                            value={draft.likes.clone()}
                            oninput={props.on_draft_likes_change.clone()}
                            placeholder="Likes"
                            class={classes!(
                                "w-32",
                                "px-3",
                                "py-2",
                                "rounded-lg",
                                "border",
                                "border-[var(--border)]",
                                "bg-[var(--surface)]",
                                "text-[var(--text)]",
                                "outline-none",
                                "focus:border-[var(--primary)]"
                            )}
                        />
                    </div>
                    <div class={classes!("flex", "justify-end", "gap-2")}>
                        <button
                            type="button"
                            onclick={props.on_edit_cancel.clone()}
                            disabled={props.saving}
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
                        >
                            { "Cancel" }
                        </button>
                        <button
                            type="button"
                            onclick={props.on_edit_save.clone()}
                            disabled={props.saving}
                            class={classes!(
                                "px-4",
                                "py-2",
                                "rounded-lg",
                                "bg-[var(--primary)]",
                                "text-white",
                                "text-sm",
                                "font-semibold",
                                "hover:opacity-90",
                                "transition-opacity",
                                "disabled:opacity-50"
                            )}
                        >
                            { if props.saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </div>
            </div>
        };
    }

    html! {
        <div class={row_classes}>
            <div class={classes!("flex", "items-start", "gap-3")}>
                <input
                    type="checkbox"
                    checked={props.selected}
                    onchange={toggle}
                    class={classes!("mt-1")}
                />
                <div class={classes!("flex-1", "min-w-0")}>
                    <p class={classes!("text-[var(--text)]", "break-words")}>
                        { if record.wish.is_empty() { "(no wish)" } else { record.wish.as_str() } }
                    </p>
                    <div class={classes!(
                        "mt-2",
                        "flex",
                        "flex-wrap",
                        "items-center",
                        "gap-3",
                        "text-sm",
                        "text-[var(--muted)]"
                    )}>
                        <span>
                            { if record.name.is_empty() { "Anonymous".to_string() } else { record.name.clone() } }
                        </span>
                        <span>{ format!("❤️ {}", record.likes) }</span>
                        <span>{ format_ms(record.created_at_ms) }</span>
                        {
                            if let Some(character) = record.character.as_ref() {
                                html! {
                                    <span class={classes!(
                                        "inline-flex",
                                        "items-center",
                                        "gap-1",
                                        "px-2",
                                        "py-0.5",
                                        "rounded-full",
                                        "bg-[var(--primary)]/10",
                                        "text-[var(--primary)]",
                                        "text-xs",
                                        "font-semibold"
                                    )}>
                                        { character.name.clone() }
                                    </span>
                                }
                            } else {
                                Html::default()
                            }
                        }
                    </div>
                </div>
                <div class={classes!("flex", "gap-2")}>
                    <button
                        type="button"
                        onclick={edit}
                        class={classes!(
                            "px-3",
                            "py-1.5",
                            "rounded-lg",
                            "border",
                            "border-[var(--border)]",
                            "text-sm",
                            "font-semibold",
                            "text-[var(--text)]",
                            "hover:border-[var(--primary)]",
                            "hover:text-[var(--primary)]",
                            "transition-colors"
                        )}
                    >
                        { "Edit" }
                    </button>
                    <button
                        type="button"
                        onclick={delete}
                        class={classes!(
                            "px-3",
                            "py-1.5",
                            "rounded-lg",
                            "border",
                            "border-red-600/40",
                            "text-sm",
                            "font-semibold",
                            "text-red-600",
                            "hover:bg-red-600",
                            "hover:text-white",
                            "transition-colors"
                        )}
                    >
                        { "Delete" }
                    </button>
                </div>
            </div>
        </div>
    }
}
