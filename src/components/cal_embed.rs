use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalEmbedProps {
    /// Cal link, e.g. "infofuel.ca/30min" or "username/30min".
    pub cal_link: AttrValue,
    /// Unique namespace in case a page carries multiple embeds.
    #[prop_or(AttrValue::Static("bookcall"))]
    pub namespace: AttrValue,
    /// Pixel height of the embedded calendar, e.g. "880px".
    #[prop_or(AttrValue::Static("880px"))]
    pub height: AttrValue,
}

#[function_component(CalEmbed)]
pub fn cal_embed(props: &CalEmbedProps) -> Html {
    let src = format!(
        "https://cal.com/{}?embed={}&layout=month_view",
        props.cal_link, props.namespace
    );

    html! {
        <div class="cal-embed-frame">
            <iframe
                title={props.namespace.clone()}
                src={src}
                style={format!("width: 100%; height: {}; border: none;", props.height)}
            />
            <style>
                {r#"
.cal-embed-frame {
    border-radius: 16px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.06);
    backdrop-filter: blur(8px);
    padding: 1rem;
    overflow: hidden;
}
                "#}
            </style>
        </div>
    }
}
