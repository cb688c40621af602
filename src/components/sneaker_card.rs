//! Card component for one sneaker in the collection grid.
//!
//! DESIGN
//! ======
//! The card itself opens the note editor; the delete button and the
//! external product link stop propagation so they never double as an
//! edit gesture.

#[cfg(test)]
#[path = "sneaker_card_test.rs"]
mod sneaker_card_test;

use leptos::prelude::*;

use crate::net::types::Sneaker;

/// A clickable card representing one owned sneaker.
#[component]
pub fn SneakerCard(
    sneaker: Sneaker,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let sneaker_id = sneaker.id;
    let price_label = format_price(sneaker.price);
    let note = sneaker.note.clone();
    let link = sneaker.link.clone();
    let image = sneaker.image.clone();

    view! {
        <div class="sneaker-card" on:click=move |_| on_edit.run(sneaker_id)>
            {image.map(|src| {
                view! {
                    <img class="sneaker-card__image" src=src alt=sneaker.name.clone()/>
                }
            })}
            <span class="sneaker-card__name">{sneaker.name.clone()}</span>
            <span class="sneaker-card__meta">
                {sneaker.brand.clone()}
                " · "
                {sneaker.colorway.clone()}
            </span>
            <span class="sneaker-card__price">{price_label}</span>
            {note.map(|text| {
                view! { <p class="sneaker-card__note">{text}</p> }
            })}
            {link.map(|href| {
                view! {
                    <a
                        class="sneaker-card__link"
                        href=href
                        target="_blank"
                        rel="noreferrer"
                        on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
                    >
                        "View product"
                    </a>
                }
            })}
            <button
                class="sneaker-card__delete"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_delete.run(sneaker_id);
                }
                title="Remove from collection"
                aria-label="Remove from collection"
            >
                "✕"
            </button>
        </div>
    }
}

/// Format an optional retail price for display.
fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("${value:.2}"),
        None => "—".to_owned(),
    }
}
