use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

const WINDOW: usize = 5;

// Window of page numbers centered on the current page, clamped to the
// ends of the range.
fn page_window(current: usize, total: usize) -> std::ops::RangeInclusive<usize> {
    if total <= WINDOW {
        return 1..=total;
    }
    let start = current
        .saturating_sub(WINDOW / 2)
        .max(1)
        .min(total - WINDOW + 1);
    start..=start + WINDOW - 1
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let button_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-[var(--text)]",
        "text-sm",
        "font-semibold",
        "transition-colors",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(current_page.saturating_sub(1)))
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(current_page + 1))
    };

    html! {
        <nav class="flex flex-wrap items-center gap-2" aria-label="Pagination">
            <button
                type="button"
                class={button_classes.clone()}
                disabled={current_page <= 1}
                onclick={prev_onclick}
                aria-label="Previous page"
            >
                {"<"}
            </button>
            { for page_window(current_page, total_pages).map(|page| {
                let is_current = page == current_page;
                let onclick = {
                    let on_page_change = on_page_change.clone();
                    Callback::from(move |_| on_page_change.emit(page))
                };
                html! {
                    <button
                        key={format!("page-{page}")}
                        type="button"
                        class={classes!(
                            button_classes.clone(),
                            if is_current {
                                "bg-[var(--primary)] text-white border-transparent pointer-events-none"
                            } else {
                                ""
                            }
                        )}
                        aria-label={format!("Go to page {page}")}
                        aria-current={is_current.then(|| AttrValue::from("page"))}
                        disabled={is_current}
                        onclick={onclick}
                    >
                        { page }
                    </button>
                }
            }) }
            <button
                type="button"
                class={button_classes.clone()}
                disabled={current_page >= total_pages}
                onclick={next_onclick}
                aria-label="Next page"
            >
                {">"}
            </button>
        </nav>
    }
}
