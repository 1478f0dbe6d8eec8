//! Card grid with the empty-state indicator and per-card like buttons.

use crate::core::catalog::CardRecord;
use crate::core::likes::like_classes;
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(CardGrid)]
pub(crate) fn card_grid() -> Html {
    let cards = use_selector(|store: &AppStore| store.filters.cards.clone());
    let no_results = *use_selector(|store: &AppStore| store.filters.summary.no_results());

    html! {
        <>
            <section id="grid" class="card-grid">
                {for cards.iter().map(|card| html! {
                    <CardTile key={card.id.clone()} card={card.clone()} />
                })}
            </section>
            <p id="noResults" class={classes!("no-results", (!no_results).then_some("hidden"))}>
                {"No cards match these filters."}
            </p>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct CardTileProps {
    card: CardRecord,
}

#[function_component(CardTile)]
fn card_tile(props: &CardTileProps) -> Html {
    let card = &props.card;
    let style = (!card.visible).then_some("display: none;");

    html! {
        <article
            class="card"
            style={style}
            data-category={card.category.clone()}
            data-media={card.media.clone()}
            data-date={card.date.clone()}
        >
            {card.image.clone().map(|src| html! {
                <img src={src} alt={card.title.clone()} loading="lazy" />
            }).unwrap_or_default()}
            <div class="card-body">
                <h3>{card.title.clone()}</h3>
                <p>{card.description.clone()}</p>
                <footer class="card-meta">
                    <span class="badge">{card.category.clone()}</span>
                    <span class="badge">{card.media.clone()}</span>
                    <time datetime={card.date.clone()}>{card.date.clone()}</time>
                    <LikeButton id={card.id.clone()} />
                </footer>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct LikeButtonProps {
    id: String,
}

#[function_component(LikeButton)]
fn like_button(props: &LikeButtonProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let liked = {
        let id = props.id.clone();
        *use_selector(move |store: &AppStore| store.likes.contains(&id))
    };
    let (icon, tint) = like_classes(liked);
    let onclick = {
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            let id = id.clone();
            dispatch.reduce_mut(move |store| {
                store.likes.toggle(&id);
            });
        })
    };

    html! {
        <button
            class={classes!("like-btn", tint)}
            aria-pressed={liked.to_string()}
            aria-label="Like"
            onclick={onclick}
        >
            <i class={icon}></i>
        </button>
    }
}
