use deck_types::CardDefinition;
use leptos::prelude::*;

/// Leptos element type for a lowercase tag name from the part table.
macro_rules! node_type {
    (div) => {
        leptos::html::Div
    };
    (h2) => {
        leptos::html::H2
    };
}

/// Expands every row of the part table into a component rendering that
/// row's definition as its element.
///
/// Every part takes the same props: a `class` appended after the definition's
/// defaults, an optional `node_ref` that is set when the element is built and
/// reset to `None` when the part is torn down, and optional children. Anything
/// else (`attr:id`, `{..}` spreads, event handlers) lands on the root element
/// through Leptos' attribute forwarding.
macro_rules! card_components {
    ($($(#[$meta:meta])* $component:ident => $part:ident, $static:ident, $element:ident, $class:literal;)*) => {
        $(
            $(#[$meta])*
            #[component]
            pub fn $component(
                /// Extra classes, appended after the defaults
                #[prop(into, optional)]
                class: MaybeProp<String>,
                /// Receives the rendered element while it is mounted
                #[prop(optional)]
                node_ref: Option<NodeRef<node_type!($element)>>,
                #[prop(optional)] children: Option<Children>,
            ) -> impl IntoView {
                let definition: &'static CardDefinition = &deck_types::$static;
                let mergedClass = move || definition.merge_class(class.get().as_deref());

                // NodeRef is only ever set by the renderer; clear the caller's
                // handle ourselves once this part goes away.
                if let Some(forwarded) = node_ref {
                    on_cleanup(move || *forwarded.write() = None);
                }
                let nodeRef = node_ref.unwrap_or_else(NodeRef::new);

                view! {
                    <$element class=mergedClass node_ref=nodeRef>
                        {children.map(|children| children())}
                    </$element>
                }
            }
        )*
    };
}

deck_types::with_card_parts!(card_components);


#[cfg(all(test, target_arch = "wasm32", feature = "hydrate"))]
mod browser_tests {
    use super::*;
    use leptos::html::H2;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn forwarded_ref_follows_mount_and_removal() {
        let titleRef = NodeRef::<H2>::new();
        let (visible, setVisible) = signal(true);

        let _mounted = leptos::mount::mount_to_body(move || {
            view! {
                <Show when=move || visible.get()>
                    <CardTitle node_ref=titleRef>"Plan"</CardTitle>
                </Show>
            }
        });
        leptos::task::tick().await;

        let mounted = titleRef.get_untracked().expect("title was not bound");
        assert_eq!(mounted.tag_name(), "H2");
        assert_eq!(mounted.text_content().as_deref(), Some("Plan"));

        setVisible.set(false);
        leptos::task::tick().await;
        assert!(titleRef.get_untracked().is_none());

        setVisible.set(true);
        leptos::task::tick().await;
        assert!(titleRef.get_untracked().is_some());
    }
}
