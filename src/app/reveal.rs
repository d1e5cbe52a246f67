use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{Transition, Variant};

/// Returns a flag that flips to true the first time `node` scrolls into view
/// (or right after hydration when `on_mount` is set) and then stays true.
pub fn use_revealed(node: NodeRef<html::Div>, on_mount: bool) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let visible = use_element_visibility(node);
    Effect::new(move |_| {
        if revealed.get_untracked() {
            return;
        }
        if on_mount || visible.get() {
            set_revealed.set(true);
        }
    });
    revealed
}

/// Animates its children from `hidden` to [`Variant::VISIBLE`] with a CSS
/// transition described by `transition`.
#[component]
pub fn Reveal(
    #[prop(default = Variant::ITEM_HIDDEN)] hidden: Variant,
    #[prop(default = Transition::ITEM)] transition: Transition,
    /// Play on mount instead of on first viewport entry.
    #[prop(optional)]
    on_mount: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_revealed(node, on_mount);
    let timing = transition.css(&["opacity", "transform"]);
    let style = move || {
        let variant = if revealed.get() {
            Variant::VISIBLE
        } else {
            hidden
        };
        format!("{} transition: {timing};", variant.style())
    };
    view! {
        <div node_ref=node class=class style=style>
            {children()}
        </div>
    }
}
