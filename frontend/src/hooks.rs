use yew::prelude::*;

/// Paginate arbitrary vectors inside a component.
///
/// Returns the visible slice, the clamped current page, the total page
/// count, and a callback to change pages. The filtered ema list is sliced
/// per page for rendering while selection logic keeps operating on the
/// full view.
///
/// # Example
/// ```rust
/// let (visible, current_page, total_pages, go_to_page) =
///     use_pagination(filtered_emas.clone(), 20);
/// ```
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = items_per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = use_state(|| 1usize);

    // Snap back into range when the list shrinks, e.g. after a bulk delete
    // or a narrower search.
    {
        let page = page.clone();
        use_effect_with(total_pages, move |total| {
            if *page > *total {
                page.set(*total);
            }
            || ()
        });
    }

    let current = (*page).clamp(1, total_pages);
    let start = per_page * (current - 1);
    let visible: Vec<T> = items.iter().skip(start).take(per_page).cloned().collect();

    let go_to_page = {
        let page = page.clone();
        Callback::from(move |requested: usize| {
            let next = requested.clamp(1, total_pages);
            if next != *page {
                page.set(next);
            }
        })
    };

    (visible, current, total_pages, go_to_page)
}
