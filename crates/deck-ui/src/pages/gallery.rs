use deck_types::{CardDefinition, CardPart};
use leptos::html::Div;
use leptos::prelude::*;

use crate::components::card::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
};

fn mount_status(tag: Option<String>) -> String {
    match tag {
        Some(tag) => format!("node_ref bound to <{tag}>"),
        None => "node_ref not bound".to_string(),
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let sampleRef = NodeRef::<Div>::new();
    let (mountedTag, setMountedTag) = signal(Option::<String>::None);

    // Effects only run in the browser, so the server always renders the unbound status.
    Effect::new(move |_| {
        setMountedTag.set(sampleRef.get().map(|element| element.tag_name().to_lowercase()));
    });

    view! {
        <div class="gallery-header">
            <h1>"Card Gallery"</h1>
            <p class="subtitle">"Every card part, with its defaults and an override"</p>
        </div>

        <section class="gallery-sample">
            <Card node_ref=sampleRef attr:id="sample-card">
                <CardHeader>
                    <CardTitle>"Team plan"</CardTitle>
                    <CardDescription>"Billed monthly, cancel any time"</CardDescription>
                </CardHeader>
                <CardContent>
                    <p>"5 seats, 100 GB storage, priority support."</p>
                </CardContent>
                <CardFooter class="justify-between">
                    <span>{move || mount_status(mountedTag.get())}</span>
                    <a href="/api/v1/cards" rel="external">"Definitions"</a>
                </CardFooter>
            </Card>
        </section>

        <section class="gallery-grid">
            {CardPart::ALL
                .iter()
                .map(|part| view! { <DefinitionCard definition=part.definition() /> })
                .collect_view()}
        </section>

        <section class="gallery-overrides">
            <Card class="border-dashed shadow-none" attr:data-variant="outlined">
                <CardHeader class="pb-2">
                    <CardTitle class="text-sm uppercase">"Overridden"</CardTitle>
                </CardHeader>
                <CardContent>
                    <code>{CardPart::Card.definition().merge_class(Some("border-dashed shadow-none"))}</code>
                </CardContent>
            </Card>
        </section>
    }
}

/// One tile describing a definition: its name, element and default classes.
#[component]
fn DefinitionCard(definition: &'static CardDefinition) -> impl IntoView {
    view! {
        <Card attr:data-part=definition.name()>
            <CardHeader>
                <CardTitle>{definition.name()}</CardTitle>
                <CardDescription>{format!("<{}>", definition.tag())}</CardDescription>
            </CardHeader>
            <CardContent>
                <code>{definition.default_class()}</code>
            </CardContent>
        </Card>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn gallery_lists_every_part() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <GalleryPage /> }.to_html());

        for definition in CardPart::definitions() {
            assert!(html.contains(&format!("data-part=\"{}\"", definition.name())));
            assert!(html.contains(definition.default_class()));
        }
        assert!(html.contains("id=\"sample-card\""));
        assert!(html.contains("node_ref not bound"));
        assert!(html.contains("data-variant=\"outlined\""));
    }

    #[test]
    fn mount_status_names_the_element() {
        assert_eq!(mount_status(Some("div".into())), "node_ref bound to <div>");
        assert_eq!(mount_status(None), "node_ref not bound");
    }
}
