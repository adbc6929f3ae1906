use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::cal_embed::CalEmbed;
use crate::config;
use crate::engine::theme::{ThemeEngine, ThemeKind};
use crate::scroll_to_section;

/// Landing-page template demo. Every surface except the booking section is
/// styled from the currently selected theme bundle; the booking section is
/// pinned to the baseline look no matter what the gallery picks.
#[function_component(Template)]
pub fn template() -> Html {
    let engine = use_state(ThemeEngine::default);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let bundle = engine.current_bundle();
    let pinned = ThemeEngine::pinned_baseline_bundle();

    let on_pick = {
        let engine = engine.clone();
        Callback::from(move |key: &'static str| {
            let mut next = (*engine).clone();
            match next.select(key) {
                Ok(kind) => {
                    info!("theme switched to {}", kind.key());
                    engine.set(next);
                }
                Err(err) => warn!("theme selection ignored: {}", err),
            }
        })
    };

    let on_reset = {
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*engine).clone();
            next.reset();
            engine.set(next);
        })
    };

    let discover_points = [
        "The exact offer structure that turned casual viewers into buyers.",
        "How one piece of content a day feeds an automated sales pipeline.",
        "The booking flow that fills a calendar without a single cold DM.",
    ];

    let heading_style = format!("color: {};", bundle.heading);
    let card_class = format!("{} {}", bundle.card, bundle.card_hover);

    html! {
        <div
            class="template-page"
            style={format!("background: {}; color: {};", bundle.background, bundle.body_text)}
        >
            <div class="page-glows">
                <div
                    class="glow glow-left"
                    style={format!("background: {};", bundle.glow_primary.radial_css())}
                ></div>
                <div
                    class="glow glow-right"
                    style={format!("background: {};", bundle.glow_secondary.radial_css())}
                ></div>
            </div>
            <div
                class="ember-field"
                style={format!("opacity: {};", bundle.ember_opacity)}
            ></div>

            <section id="vsl" class="template-section">
                <div class="centered narrow">
                    <p class={classes!("brand-pill", bundle.accent_text.to_string())}>
                        {"Brand Name"}
                    </p>
                    <h1 class="vsl-title" style={heading_style.clone()}>
                        {"Learn Exactly How I Went From ________ To ________"}
                    </h1>
                    <p class="vsl-subtitle">
                        {"And exactly how you can... *An achievable result from your offer*"}
                    </p>
                </div>
                <div class="narrow">
                    <div class={classes!("video-panel", card_class.clone())}>
                        <video src="/assets/main-video.mp4" controls={true}></video>
                    </div>
                    <div class="centered">
                        <a
                            class={classes!("signup-link", bundle.accent_text.to_string())}
                            href="#cta"
                        >
                            {"Sign Up"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="discover" class="template-section">
                <div class="centered narrow">
                    <h2 style={heading_style.clone()}>{"Discover"}</h2>
                    <p>{"Key takeaways from your offer"}</p>
                </div>
                <div class="discover-list narrow">
                    { for discover_points.iter().map(|&point| html! {
                        <div
                            class={classes!("discover-item", bundle.border.to_string())}
                            style={format!("background: {};", bundle.tint(0.06))}
                        >
                            <span class={classes!("bullet-dot", bundle.gradient_text.to_string())}>
                                {"●"}
                            </span>
                            <p>{point}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="themes" class="template-section">
                <div class="centered">
                    <h2 style={heading_style.clone()}>{"Modern Themes Young Adults Love"}</h2>
                    <p>
                        {"Vibe-tested looks you can apply to your landing page in minutes. \
                          Pick one below — the reset brings back the original."}
                    </p>
                </div>
                <div class="gallery-grid">
                    { for ThemeKind::ALL.iter().map(|&kind| {
                        let onclick = {
                            let on_pick = on_pick.clone();
                            Callback::from(move |_: MouseEvent| on_pick.emit(kind.key()))
                        };
                        let active = engine.active() == kind;
                        html! {
                            <button
                                class={classes!(
                                    "gallery-card",
                                    card_class.clone(),
                                    active.then_some("gallery-card-active"),
                                )}
                                {onclick}
                            >
                                <div
                                    class="gallery-preview"
                                    style={format!("background: {};", kind.preview_css())}
                                ></div>
                                <div class="gallery-label" style={heading_style.clone()}>
                                    {kind.label()}
                                </div>
                                <p class="gallery-tagline">{kind.tagline()}</p>
                                <div class="gallery-swatches">
                                    { for kind.swatches().iter().map(|&swatch| html! {
                                        <span
                                            class="swatch"
                                            style={format!("background: {};", swatch)}
                                        ></span>
                                    }) }
                                </div>
                            </button>
                        }
                    }) }
                </div>
                <div class="centered">
                    <button class={bundle.reset_control} onclick={on_reset}>
                        {"Reset to original look"}
                    </button>
                </div>
            </section>

            <section id="cta" class="template-section">
                <div class="centered narrow">
                    <h3 class="cta-title" style={heading_style.clone()}>{"Interested?"}</h3>
                    <p>{"This is where potential customers will enter their information"}</p>
                    <button
                        class={bundle.button_primary}
                        onclick={Callback::from(move |_: MouseEvent| scroll_to_section("book"))}
                    >
                        {"Get The Full Offer"}
                    </button>
                </div>
            </section>

            // Pinned region: always rendered from the baseline bundle so the
            // booking flow looks the same under every theme.
            <section
                id="book"
                class="template-section booking-section"
                style={format!("color: {};", pinned.body_text)}
            >
                <div class="centered">
                    <h4 style={format!("color: {};", pinned.heading)}>{"Like What You See?"}</h4>
                    <p>{"Book a free consultation"}</p>
                </div>
                <div class="booking-embed">
                    <CalEmbed
                        cal_link={config::CAL_LINK}
                        namespace={config::CAL_NAMESPACE}
                        height={config::CAL_EMBED_HEIGHT}
                    />
                    <p class="embed-fallback">
                        {"Having trouble? "}
                        <a
                            class={pinned.link_hover}
                            href={config::cal_booking_url()}
                            target="_blank"
                            rel="noreferrer"
                        >
                            {"Open Cal.com in a new tab"}
                        </a>
                    </p>
                </div>
            </section>

            <footer class={classes!("template-footer", bundle.border.to_string())}>
                <div>{"InfoFuel landing-page template"}</div>
                <div class="footer-legal">
                    <a class={bundle.link_hover} href="/privacy-policy">{"Privacy Policy"}</a>
                    <a class={bundle.link_hover} href="/terms-of-service">{"Terms of Service"}</a>
                </div>
            </footer>

            <style>
                {r#"
.template-page {
    min-height: 100vh;
    position: relative;
    overflow-x: hidden;
    font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    padding-top: 4rem;
}

.page-glows {
    position: fixed;
    inset: 0;
    pointer-events: none;
    z-index: 0;
}

.glow {
    position: absolute;
    border-radius: 50%;
    filter: blur(120px);
    opacity: 0.2;
}

.glow-left { left: -10rem; top: 6rem; width: 32rem; height: 32rem; }
.glow-right { right: -15%; bottom: 2.5rem; width: 28rem; height: 28rem; }

.ember-field {
    position: fixed;
    inset: 0;
    pointer-events: none;
    background-image: radial-gradient(rgba(255, 255, 255, 0.35) 1px, transparent 1px);
    background-size: 48px 48px;
}

.template-section {
    position: relative;
    padding: 4rem 1.5rem;
    max-width: 72rem;
    margin: 0 auto;
}

.centered { text-align: center; }
.narrow { max-width: 48rem; margin-left: auto; margin-right: auto; }

.brand-pill {
    font-size: 1.25rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-bottom: 0.75rem;
}

.vsl-title {
    font-size: clamp(1.875rem, 5vw, 3rem);
    font-weight: 900;
    line-height: 1.2;
    margin: 0.75rem 0 1rem;
}

.vsl-subtitle { font-size: 1.125rem; }

.video-panel {
    margin-top: 3rem;
    padding: 0.5rem;
    overflow: hidden;
}

.video-panel video {
    display: block;
    width: 100%;
    aspect-ratio: 16 / 9;
    object-fit: cover;
    border-radius: 12px;
}

.signup-link {
    display: inline-block;
    margin-top: 2rem;
    font-size: 1.5rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    text-decoration: none;
}

.signup-link:hover { text-decoration: underline; }

.discover-list {
    margin-top: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.discover-item {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    border: 1px solid;
    border-radius: 12px;
    padding: 1.25rem;
}

.discover-item p { margin: 0; }

.bullet-dot { font-size: 0.7rem; margin-top: 0.35rem; }

.gallery-grid {
    margin-top: 2.5rem;
    margin-bottom: 2.5rem;
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
}

.gallery-card {
    text-align: left;
    cursor: pointer;
    font: inherit;
    color: inherit;
    padding: 1.25rem;
}

.gallery-card-active { outline: 2px solid rgba(255, 255, 255, 0.35); outline-offset: 2px; }

.gallery-preview {
    height: 7rem;
    width: 100%;
    border-radius: 12px;
    box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.1);
}

.gallery-label { margin-top: 1rem; font-size: 0.875rem; font-weight: 600; }

.gallery-tagline { margin: 0.25rem 0 0; font-size: 0.75rem; }

.gallery-swatches {
    margin-top: 0.75rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.swatch {
    height: 1rem;
    width: 1rem;
    border-radius: 50%;
    box-shadow: inset 0 0 0 1px rgba(255, 255, 255, 0.2);
}

.cta-title { font-size: 2rem; font-weight: 700; margin-bottom: 0.75rem; }

.booking-embed { max-width: 60rem; margin: 2.5rem auto 0; }

.embed-fallback { margin-top: 1rem; text-align: center; font-size: 0.875rem; }

.embed-fallback a { color: inherit; text-decoration: underline; }

.template-footer {
    position: relative;
    border-top: 1px solid;
    padding: 2.5rem 1.5rem;
    font-size: 0.875rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
}

@media (min-width: 640px) {
    .template-footer { flex-direction: row; }
}

.footer-legal { display: flex; gap: 1.5rem; }
.footer-legal a { color: inherit; text-decoration: none; }
.footer-legal a:hover { text-decoration: underline; }

/* --- shared theme tokens --- */

.grad-text {
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.grad-text-ember { background-image: linear-gradient(90deg, #ff6b2c, #e63946); }
.grad-text-neon { background-image: linear-gradient(90deg, #a855f7, #22d3ee); }
.grad-text-pastel { background-image: linear-gradient(90deg, #84dcc6, #ffa69e); }
.grad-text-mono { background-image: linear-gradient(90deg, #ffffff, #9ca3af); }
.grad-text-earthy { background-image: linear-gradient(90deg, #b9a78b, #2e6f62); }

.btn-primary {
    display: inline-block;
    border: none;
    border-radius: 10px;
    padding: 0.9rem 1.75rem;
    font-size: 1rem;
    font-weight: 600;
    color: #ffffff;
    cursor: pointer;
    margin-top: 1.5rem;
    transition: opacity 0.2s ease;
}

.btn-primary:hover { opacity: 0.9; }

.btn-ember {
    background: linear-gradient(90deg, #ff6b2c, #e63946);
    box-shadow: 0 10px 30px -10px rgba(230, 57, 70, 0.6);
}

.btn-neon {
    background: linear-gradient(90deg, #a855f7, #22d3ee);
    box-shadow: 0 10px 30px -10px rgba(168, 85, 247, 0.6);
}

.btn-pastel {
    background: linear-gradient(90deg, #84dcc6, #ffa69e);
    color: #1f2937;
    box-shadow: 0 10px 30px -10px rgba(132, 220, 198, 0.5);
}

.btn-mono {
    background: #ffffff;
    color: #0a0a0a;
    box-shadow: 0 10px 30px -10px rgba(255, 255, 255, 0.3);
}

.btn-earthy {
    background: linear-gradient(90deg, #8b7a5a, #2e6f62);
    box-shadow: 0 10px 30px -10px rgba(46, 111, 98, 0.6);
}

.glass-card {
    border-radius: 16px;
    border: 1px solid;
    backdrop-filter: blur(8px);
    transition: border-color 0.3s ease, box-shadow 0.3s ease;
}

.card-ember { background: rgba(255, 255, 255, 0.06); border-color: rgba(255, 255, 255, 0.1); }
.card-neon { background: rgba(99, 102, 241, 0.10); border-color: rgba(168, 85, 247, 0.35); }
.card-pastel { background: rgba(132, 220, 198, 0.08); border-color: rgba(165, 255, 214, 0.25); }
.card-mono { background: rgba(255, 255, 255, 0.04); border-color: rgba(255, 255, 255, 0.15); }
.card-earthy { background: rgba(185, 167, 139, 0.08); border-color: rgba(185, 167, 139, 0.30); }

.card-hover-ember:hover {
    border-color: rgba(255, 146, 72, 0.5);
    box-shadow: 0 10px 40px -10px rgba(255, 146, 72, 0.3);
}

.card-hover-neon:hover {
    border-color: rgba(34, 211, 238, 0.6);
    box-shadow: 0 10px 40px -10px rgba(168, 85, 247, 0.45);
}

.card-hover-pastel:hover {
    border-color: rgba(255, 166, 158, 0.6);
    box-shadow: 0 10px 40px -10px rgba(255, 166, 158, 0.35);
}

.card-hover-mono:hover {
    border-color: rgba(255, 255, 255, 0.4);
    box-shadow: 0 10px 40px -10px rgba(255, 255, 255, 0.2);
}

.card-hover-earthy:hover {
    border-color: rgba(46, 111, 98, 0.6);
    box-shadow: 0 10px 40px -10px rgba(46, 111, 98, 0.4);
}

.border-ember { border-color: rgba(255, 146, 72, 0.4); }
.border-neon { border-color: rgba(168, 85, 247, 0.4); }
.border-pastel { border-color: rgba(165, 255, 214, 0.35); }
.border-mono { border-color: rgba(255, 255, 255, 0.2); }
.border-earthy { border-color: rgba(185, 167, 139, 0.4); }

.accent-ember { color: #ff9248; }
.accent-neon { color: #22d3ee; }
.accent-pastel { color: #ffa69e; }
.accent-mono { color: #e5e7eb; }
.accent-earthy { color: #b9a78b; }

.link-ember:hover { color: #ff9248; }
.link-neon:hover { color: #22d3ee; }
.link-pastel:hover { color: #ffa69e; }
.link-mono:hover { color: #ffffff; }
.link-earthy:hover { color: #b9a78b; }

.reset-control {
    background: none;
    border: 1px solid;
    border-radius: 9999px;
    padding: 0.6rem 1.5rem;
    font-size: 0.875rem;
    cursor: pointer;
    transition: opacity 0.2s ease;
}

.reset-control:hover { opacity: 0.8; }

.reset-ember { border-color: rgba(255, 146, 72, 0.5); color: #ff9248; }
.reset-neon { border-color: rgba(34, 211, 238, 0.5); color: #22d3ee; }
.reset-pastel { border-color: rgba(255, 166, 158, 0.5); color: #ffa69e; }
.reset-mono { border-color: rgba(255, 255, 255, 0.4); color: #e5e7eb; }
.reset-earthy { border-color: rgba(185, 167, 139, 0.5); color: #b9a78b; }
                "#}
            </style>
        </div>
    }
}
