use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::cal_embed::CalEmbed;
use crate::config;
use crate::engine::counter::{CounterRun, MotionPreference, ReducedMotionMode};
use crate::scroll_to_section;

const COUNTER_DURATION_MS: u32 = 2000;
const COUNTER_INTERVAL_MS: u32 = 50;

fn result_targets() -> [(&'static str, f64); 4] {
    [
        ("cash", 500.0),
        ("leads", 3000.0),
        ("deals", 800.0),
        ("years", 5.0),
    ]
}

/// Per-tick copy of the counter values, kept in component state so the
/// results section re-renders while the run animates.
#[derive(Debug, Clone, PartialEq, Default)]
struct CounterSnapshot {
    cash: f64,
    leads: f64,
    deals: f64,
    years: f64,
}

impl CounterSnapshot {
    fn from_run(run: &CounterRun) -> Self {
        Self {
            cash: run.value("cash").unwrap_or_default(),
            leads: run.value("leads").unwrap_or_default(),
            deals: run.value("deals").unwrap_or_default(),
            years: run.value("years").unwrap_or_default(),
        }
    }

    fn at_targets() -> Self {
        let mut snapshot = Self::default();
        for (name, target) in result_targets() {
            match name {
                "cash" => snapshot.cash = target,
                "leads" => snapshot.leads = target,
                "deals" => snapshot.deals = target,
                _ => snapshot.years = target,
            }
        }
        snapshot
    }
}

fn prefers_reduced_motion() -> MotionPreference {
    let reduced = web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if reduced {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    }
}

/// Rounds and groups thousands: 3000.4 -> "3,000".
fn format_grouped(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let counters = use_state(CounterSnapshot::default);

    // Scroll to top only on initial mount
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

    // One counter run per mount. The interval handle is the scoped resource:
    // it is dropped from inside its own callback once the run settles, and
    // unconditionally from the effect destructor on unmount.
    {
        let counters = counters.clone();
        use_effect_with_deps(
            move |_| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let cleanup_handle = interval_handle.clone();

                match CounterRun::with_motion(
                    result_targets(),
                    COUNTER_DURATION_MS,
                    COUNTER_INTERVAL_MS,
                    prefers_reduced_motion(),
                    ReducedMotionMode::JumpToTarget,
                ) {
                    Ok(run) => {
                        counters.set(CounterSnapshot::from_run(&run));
                        if !run.is_settled() {
                            let interval_ms = run.interval_ms();
                            let run = Rc::new(RefCell::new(run));
                            let ticker_handle = interval_handle.clone();
                            let interval = Interval::new(interval_ms, move || {
                                let mut run = run.borrow_mut();
                                run.tick();
                                counters.set(CounterSnapshot::from_run(&run));
                                if run.is_settled() {
                                    ticker_handle.borrow_mut().take();
                                }
                            });
                            *interval_handle.borrow_mut() = Some(interval);
                        }
                    }
                    Err(err) => {
                        warn!("results counters disabled: {}", err);
                        counters.set(CounterSnapshot::at_targets());
                    }
                }

                move || {
                    cleanup_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    let book_call_onclick = Callback::from(move |_: MouseEvent| {
        scroll_to_section("book-call");
    });

    let process_cards = [
        ("🎯", "Strategic Offer Design", "Nail your niche and build offers that convert."),
        ("⚙️", "Backend Systems", "Let automation sell for you while you create."),
        ("⚡", "Content-to-Sales Engine", "Turn views into booked calls."),
    ];

    let service_cards = [
        (
            "🛠️",
            "Product Creation",
            "Get professional help from industry experts to build an unstoppable product.",
        ),
        (
            "📊",
            "Sales Infrastructure",
            "Turn content into revenue with a funnel and sales stack backed by an experienced team.",
        ),
        (
            "🤝",
            "Join Our Community",
            "Access an exclusive network of driven creators and sales pros to accelerate learning.",
        ),
        (
            "🤖",
            "Backend Automation",
            "Operate like a company, not a creator—automations and analytics do the heavy lifting.",
        ),
    ];

    let how_steps = [
        (
            1,
            "LEARN",
            "Create or refine your offer. Learn the basics of online marketing and build a seamless \
             organic sales model with working product design and funnels.",
        ),
        (
            2,
            "BUILD",
            "Hire and onboard a custom sales team. Align marketing and sales. Build automations and \
             analytics to track what matters.",
        ),
        (
            3,
            "OPERATION",
            "We manage the sales team and use data from both sides to make decisions. Follow a growth \
             model to predictably increase revenue month over month.",
        ),
    ];

    let team = [
        ("Phineas", "CEO", "/assets/team-ceo.png"),
        ("Ferb", "COO", "/assets/team-cso.png"),
        ("Doofenshmirtz", "Sales", "/assets/team-coo.png"),
    ];

    html! {
        <div class="landing-page">
            <div class="page-glows">
                <div class="glow glow-left"></div>
                <div class="glow glow-right"></div>
            </div>

            <header id="hero" class="hero">
                <div class="ember-field"></div>
                <div class="hero-content">
                    <div class="pill">
                        <span class="pill-dot"></span>
                        {"3 Spots Available"}
                    </div>
                    <h1 class="hero-title">
                        {"From "}<span class="text-orange">{"Creator"}</span>{" to "}
                        <span class="text-red">{"CEO"}</span>
                        <br />
                        {"Without the Guesswork"}
                    </h1>
                    <p class="hero-subtitle">
                        {"We partner with creators to build "}
                        <span class="text-ember">{"scalable, systemized brands"}</span>
                        {" that ignite growth — while you focus on content & community."}
                    </p>
                    <button class="btn-fuel" onclick={book_call_onclick.clone()}>
                        {"Book A Call"}
                        <span class="chevron">{"›"}</span>
                    </button>
                </div>
            </header>

            <section id="process" class="section">
                <div class="ember-field"></div>
                <div class="section-header">
                    <h2 class="eyebrow">{"Process"}</h2>
                    <h3>{"Your Path to Predictable Growth"}</h3>
                    <p>{"A done-for-you system that transforms creators into scalable, revenue-driven brands."}</p>
                </div>
                <div class="card-grid three">
                    { for process_cards.iter().map(|&(icon, title, text)| html! {
                        <div class="glass-card">
                            <div class="icon-badge">{icon}</div>
                            <h4>{title}</h4>
                            <p>{text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="services" class="section">
                <div class="ember-field"></div>
                <div class="section-header">
                    <h2 class="eyebrow">{"What We Provide"}</h2>
                    <h3>
                        {"Everything You Need To Scale "}
                        <span class="grad-text-fuel">{"Your Brand’s Product"}</span>
                    </h3>
                    <p>
                        {"Our integrated team covers every core function of a revenue engine. \
                          No more juggling freelancers or scattered systems."}
                    </p>
                </div>
                <div class="card-grid two">
                    { for service_cards.iter().map(|&(icon, title, copy)| html! {
                        <div class="glass-card service-card">
                            <div class="icon-orb">{icon}</div>
                            <h4>{title}</h4>
                            <p>{copy}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="how" class="section">
                <div class="ember-field"></div>
                <div class="how-grid">
                    <div class="how-copy">
                        <h2 class="eyebrow">{"How We Do It"}</h2>
                        <h3>
                            {"From Reels to Real Profit "}
                            <span class="grad-text-fuel block">{"We Streamline the Entire Process"}</span>
                        </h3>
                        <p>
                            {"We build the full customer journey—from backend systems to platform \
                              content to trained closers—all under one roof."}
                        </p>
                        <p class="text-ember">
                            {"Turn your creative passion into predictable profit with our proven 3-phase system."}
                        </p>
                        <button class="btn-fuel" onclick={book_call_onclick.clone()}>
                            {"Start Building Your Empire"}
                            <span class="chevron">{"›"}</span>
                        </button>
                    </div>
                    <div class="how-steps">
                        { for how_steps.iter().map(|&(num, title, copy)| html! {
                            <div class="how-step">
                                <div class="step-number">{num}</div>
                                <div class="glass-card step-card">
                                    <h4 class="text-ember">{title}</h4>
                                    <p>{copy}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="results" class="section">
                <div class="ember-field"></div>
                <div class="section-header">
                    <h2 class="eyebrow">{"Results"}</h2>
                    <h3>{"From Zero to Revenue Machine"}</h3>
                    <p>{"Creators go from burnout to predictable income with InfoFuel systems."}</p>
                </div>
                <div class="card-grid four stats">
                    <div class="glass-card stat-card">
                        <div class="stat-value grad-text-fuel">
                            {format!("${}K+", counters.cash.round())}
                        </div>
                        <div class="stat-label">{"Cash Collected"}</div>
                    </div>
                    <div class="glass-card stat-card">
                        <div class="stat-value">{format!("{}+", format_grouped(counters.leads))}</div>
                        <div class="stat-label">{"Leads Generated"}</div>
                    </div>
                    <div class="glass-card stat-card">
                        <div class="stat-value">{format!("{}+", counters.deals.round())}</div>
                        <div class="stat-label">{"Deals Closed"}</div>
                    </div>
                    <div class="glass-card stat-card">
                        <div class="stat-value">{format!("{}+", counters.years.round())}</div>
                        <div class="stat-label">{"Years Experience"}</div>
                    </div>
                </div>
            </section>

            <section id="team" class="section">
                <div class="ember-field"></div>
                <div class="section-header">
                    <h2 class="eyebrow">{"Our Team"}</h2>
                    <h3>{"Meet the Minds Fueling Growth"}</h3>
                </div>
                <div class="card-grid three team-grid">
                    { for team.iter().map(|&(name, role, image)| html! {
                        <div class="team-member">
                            <div class="team-photo">
                                <img src={image} alt={name} loading="lazy" />
                            </div>
                            <h4>{name}</h4>
                            <p>{role}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="book-call" class="section">
                <div class="ember-field"></div>
                <div class="book-call-content">
                    <h2 class="grad-text-fuel">{"Let’s Build Your Growth Engine"}</h2>
                    <p>
                        {"Book a free strategy call to see how InfoFuel can install the systems, \
                          sales, and structure your brand needs."}
                    </p>
                    <CalEmbed
                        cal_link={config::CAL_LINK}
                        namespace={config::CAL_NAMESPACE}
                        height={config::CAL_EMBED_HEIGHT}
                    />
                    <p class="embed-fallback">
                        {"Having trouble? "}
                        <a href={config::cal_booking_url()} target="_blank" rel="noreferrer">
                            {"Open Cal.com in a new tab"}
                        </a>
                    </p>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div>
                        <h3 class="grad-text-fuel">{"InfoFuel"}</h3>
                        <p>
                            {"We fuel small businesses and creators with systems that ignite growth \
                              and turn ideas into revenue machines."}
                        </p>
                    </div>
                    <div>
                        <h4>{"Navigation"}</h4>
                        <div class="footer-links">
                            { for [("process", "Process"), ("services", "What We Do"),
                                   ("how", "How We Do It"), ("results", "Results"), ("team", "Team")]
                                .iter()
                                .map(|&(id, label)| {
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        scroll_to_section(id);
                                    });
                                    html! { <button class="footer-link" {onclick}>{label}</button> }
                                }) }
                        </div>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <div class="footer-links">
                            <div>{"Offer Strategy"}</div>
                            <div>{"Sales Funnels"}</div>
                            <div>{"Marketing Ecosystem"}</div>
                            <div>{"Automation"}</div>
                        </div>
                    </div>
                    <div>
                        <h4>{"Ready to Start?"}</h4>
                        <button class="footer-cta" onclick={book_call_onclick}>
                            {"Book a Call →"}
                        </button>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{"© 2025 InfoFuel. All rights reserved."}</span>
                    <div class="footer-legal">
                        <a href="/privacy-policy">{"Privacy Policy"}</a>
                        <a href="/terms-of-service">{"Terms of Service"}</a>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
.landing-page {
    min-height: 100vh;
    background: #0a0a0a;
    color: #ffffff;
    font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    position: relative;
    overflow-x: hidden;
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

.glow-left {
    left: -10rem;
    top: 25%;
    width: 50rem;
    height: 50rem;
    background: radial-gradient(closest-side, rgba(255, 107, 44, 0.35), transparent);
}

.glow-right {
    right: -20%;
    top: 55%;
    width: 45rem;
    height: 45rem;
    background: radial-gradient(closest-side, rgba(230, 57, 70, 0.32), transparent);
}

.ember-field {
    position: absolute;
    inset: 0;
    pointer-events: none;
    opacity: 0.18;
    background-image: radial-gradient(rgba(255, 146, 72, 0.4) 1px, transparent 1px);
    background-size: 48px 48px;
}

.hero {
    position: relative;
    padding: 8rem 1.5rem 6rem;
    text-align: center;
    overflow: hidden;
}

.hero-content {
    position: relative;
    max-width: 56rem;
    margin: 0 auto;
}

.pill {
    display: inline-flex;
    align-items: center;
    border-radius: 9999px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.06);
    padding: 0.5rem 1rem;
    color: #ff9248;
    backdrop-filter: blur(4px);
}

.pill-dot {
    margin-right: 0.5rem;
    height: 0.5rem;
    width: 0.5rem;
    border-radius: 50%;
    background: #ff9248;
}

.hero-title {
    margin-top: 2rem;
    font-size: clamp(3rem, 7vw, 4.5rem);
    font-weight: 700;
    line-height: 1.1;
}

.hero-subtitle {
    margin-top: 1.5rem;
    font-size: 1.25rem;
    color: #d1d5db;
    line-height: 1.6;
}

.text-orange { color: #ff6b2c; }
.text-red { color: #e63946; }
.text-ember { color: #ff9248; font-weight: 600; }

.grad-text-fuel {
    background: linear-gradient(90deg, #ff6b2c, #e63946);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.grad-text-fuel.block { display: block; }

.btn-fuel {
    display: inline-flex;
    align-items: center;
    margin-top: 2.5rem;
    border: none;
    border-radius: 9999px;
    background: linear-gradient(90deg, #ff6b2c, #e63946);
    padding: 1rem 2rem;
    font-size: 1.05rem;
    font-weight: 600;
    color: #ffffff;
    cursor: pointer;
    box-shadow: 0 10px 30px -10px rgba(230, 57, 70, 0.6);
    transition: opacity 0.2s ease;
}

.btn-fuel:hover { opacity: 0.9; }

.chevron {
    margin-left: 0.5rem;
    font-size: 1.3rem;
    line-height: 1;
}

.section {
    position: relative;
    padding: 6rem 1.5rem;
    max-width: 80rem;
    margin: 0 auto;
    overflow: hidden;
}

.section-header {
    text-align: center;
    margin-bottom: 3rem;
    position: relative;
}

.eyebrow {
    font-size: 0.875rem;
    font-weight: 600;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: #ff9248;
}

.section-header h3 {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0.5rem 0 1rem;
}

.section-header p {
    font-size: 1.125rem;
    color: #d1d5db;
    max-width: 48rem;
    margin: 0 auto;
}

.card-grid {
    display: grid;
    gap: 2rem;
    position: relative;
}

.card-grid.two { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
.card-grid.three { grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
.card-grid.four { grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); }

.glass-card {
    border-radius: 16px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.06);
    padding: 2rem;
    backdrop-filter: blur(4px);
    transition: border-color 0.3s ease, box-shadow 0.3s ease, transform 0.3s ease;
}

.glass-card:hover {
    border-color: rgba(255, 146, 72, 0.5);
    box-shadow: 0 10px 40px -10px rgba(255, 146, 72, 0.3);
    transform: translateY(-4px);
}

.glass-card h4 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 0.5rem;
}

.glass-card p { color: #d1d5db; margin: 0; }

.icon-badge {
    margin-bottom: 1.5rem;
    display: flex;
    height: 3rem;
    width: 3rem;
    align-items: center;
    justify-content: center;
    border-radius: 10px;
    background: linear-gradient(90deg, #ff6b2c, #e63946);
    font-size: 1.4rem;
}

.icon-orb {
    margin-bottom: 1.5rem;
    display: flex;
    height: 4rem;
    width: 4rem;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: linear-gradient(135deg, #ff6b2c, #e63946);
    box-shadow: 0 0 30px -8px rgba(230, 57, 70, 0.7);
    font-size: 1.8rem;
}

.service-card h4 { font-size: 1.5rem; }

.how-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 4rem;
    align-items: start;
    position: relative;
}

@media (min-width: 1024px) {
    .how-grid { grid-template-columns: 1fr 1fr; }
}

.how-copy h3 {
    font-size: 2.5rem;
    font-weight: 700;
    line-height: 1.2;
    margin: 0.75rem 0 1.25rem;
}

.how-copy p {
    font-size: 1.125rem;
    color: #d1d5db;
    margin-bottom: 1.5rem;
}

.how-steps {
    display: flex;
    flex-direction: column;
    gap: 2.5rem;
}

.how-step {
    display: flex;
    align-items: flex-start;
    gap: 1.25rem;
}

.step-number {
    flex-shrink: 0;
    display: flex;
    height: 3.5rem;
    width: 3.5rem;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    border: 4px solid #000000;
    background: linear-gradient(135deg, #ff6b2c, #e63946);
    font-size: 1.25rem;
    font-weight: 700;
}

.step-card { flex: 1; padding: 1.5rem; }

.step-card h4 { font-size: 1.5rem; margin-bottom: 0.5rem; }

.stats .stat-card { text-align: center; padding: 1.5rem; }

.stat-value {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 0.25rem;
}

.stat-label { color: #d1d5db; }

.team-grid { max-width: 64rem; margin: 0 auto; }

.team-member { text-align: center; }

.team-photo {
    margin: 0 auto 1.25rem;
    height: 14rem;
    width: 14rem;
    overflow: hidden;
    border-radius: 50%;
    box-shadow: 0 0 0 4px rgba(255, 255, 255, 0.1),
                0 10px 40px -10px rgba(255, 146, 72, 0.25);
}

.team-photo img {
    height: 100%;
    width: 100%;
    object-fit: cover;
}

.team-member h4 { font-size: 1.125rem; font-weight: 600; margin: 0; }
.team-member p { color: #d1d5db; margin: 0.25rem 0 0; }

.book-call-content {
    position: relative;
    max-width: 42rem;
    margin: 0 auto;
    text-align: center;
}

.book-call-content h2 {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.book-call-content > p {
    font-size: 1.125rem;
    color: #d1d5db;
    margin-bottom: 2.5rem;
}

.embed-fallback {
    margin-top: 1rem;
    font-size: 0.875rem;
    color: #9ca3af;
}

.embed-fallback a {
    color: inherit;
    text-decoration: underline;
}

.embed-fallback a:hover { color: #ffffff; }

.site-footer {
    position: relative;
    border-top: 1px solid rgba(255, 255, 255, 0.06);
    padding: 4rem 1.5rem;
    max-width: 80rem;
    margin: 0 auto;
}

.footer-grid {
    display: grid;
    gap: 3rem;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
}

.footer-grid h3 { font-size: 1.875rem; font-weight: 700; margin: 0; }
.footer-grid h4 { font-weight: 600; margin-bottom: 0.75rem; }
.footer-grid p { margin-top: 1rem; color: #d1d5db; }

.footer-links {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    color: #d1d5db;
}

.footer-link {
    background: none;
    border: none;
    color: inherit;
    text-align: left;
    padding: 0;
    font-size: 1rem;
    cursor: pointer;
    transition: color 0.2s ease;
}

.footer-link:hover { color: #ffffff; }

.footer-cta {
    border: none;
    border-radius: 10px;
    background: #ffffff;
    padding: 0.75rem 1.5rem;
    font-weight: 500;
    color: #ff6b2c;
    cursor: pointer;
    transition: background 0.2s ease;
}

.footer-cta:hover { background: #f3f4f6; }

.footer-bottom {
    margin-top: 3rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    border-top: 1px solid rgba(255, 255, 255, 0.06);
    padding-top: 1.5rem;
    font-size: 0.875rem;
    color: #d1d5db;
}

@media (min-width: 768px) {
    .footer-bottom { flex-direction: row; }
}

.footer-legal { display: flex; gap: 1.5rem; }

.footer-legal a {
    color: inherit;
    text-decoration: none;
    transition: color 0.2s ease;
}

.footer-legal a:hover { color: #ffffff; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_handles_the_production_targets() {
        assert_eq!(format_grouped(3000.0), "3,000");
        assert_eq!(format_grouped(500.0), "500");
        assert_eq!(format_grouped(5.0), "5");
    }

    #[test]
    fn grouping_rounds_mid_animation_values() {
        assert_eq!(format_grouped(2999.6), "3,000");
        assert_eq!(format_grouped(1234567.2), "1,234,567");
        assert_eq!(format_grouped(0.4), "0");
    }

    #[test]
    fn snapshot_at_targets_matches_the_configured_targets() {
        let snapshot = CounterSnapshot::at_targets();
        assert_eq!(snapshot.cash, 500.0);
        assert_eq!(snapshot.leads, 3000.0);
        assert_eq!(snapshot.deals, 800.0);
        assert_eq!(snapshot.years, 5.0);
    }

    #[test]
    fn snapshot_reads_every_counter_from_a_run() {
        let mut run = CounterRun::new(result_targets(), COUNTER_DURATION_MS, COUNTER_INTERVAL_MS)
            .unwrap();
        while !run.is_settled() {
            run.tick();
        }
        let snapshot = CounterSnapshot::from_run(&run);
        assert_eq!(snapshot, CounterSnapshot::at_targets());
    }
}
