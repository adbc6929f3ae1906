use yew::prelude::*;

const LAST_UPDATED: &str = "September 29, 2025";

fn legal_section(title: &str, body: Html) -> Html {
    html! {
        <section class="legal-section">
            <h2 class="grad-text-fuel">{title}</h2>
            <div class="legal-body">{body}</div>
        </section>
    }
}

fn legal_styles() -> Html {
    html! {
        <style>
            {r#"
.legal-page {
    min-height: 100vh;
    background: #0a0a0a;
    color: #ffffff;
    font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    position: relative;
    overflow-x: hidden;
}

.legal-glow {
    position: absolute;
    left: 50%;
    top: 6rem;
    height: 40rem;
    width: 40rem;
    transform: translateX(-50%);
    border-radius: 50%;
    filter: blur(120px);
    opacity: 0.2;
    background: radial-gradient(closest-side, rgba(255, 107, 44, 0.3), transparent);
    pointer-events: none;
}

.legal-content {
    position: relative;
    max-width: 56rem;
    margin: 0 auto;
    padding: 7rem 1.5rem 6rem;
}

.updated-pill {
    display: inline-flex;
    align-items: center;
    border-radius: 9999px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.06);
    padding: 0.4rem 1rem;
    font-size: 0.875rem;
    color: #ff9248;
    backdrop-filter: blur(4px);
}

.legal-content h1 {
    margin-top: 1.25rem;
    font-size: 2.5rem;
    font-weight: 700;
    line-height: 1.2;
}

.legal-intro {
    margin-top: 0.75rem;
    color: #d1d5db;
}

.grad-text-fuel {
    background: linear-gradient(90deg, #ff6b2c, #e63946);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.legal-panel {
    margin-top: 2rem;
    border-radius: 16px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.06);
    padding: 1.5rem;
    backdrop-filter: blur(4px);
}

.legal-section { margin-bottom: 2.5rem; }
.legal-section:last-child { margin-bottom: 0; }

.legal-section h2 {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 0.75rem;
}

.legal-body { color: #e5e7eb; }
.legal-body p { margin: 0 0 0.75rem; }
.legal-body p:last-child { margin-bottom: 0; }
.legal-body ul { margin: 0; padding-left: 1.25rem; }
.legal-body li { margin-bottom: 0.5rem; }
.legal-body .shout { font-style: italic; }

.legal-body a { color: inherit; text-decoration: underline; }
.legal-body a:hover { color: #ffffff; }

.back-home { margin-top: 2rem; font-size: 0.875rem; color: #9ca3af; }
.back-home a { color: inherit; text-decoration: underline; }
.back-home a:hover { color: #ffffff; }
            "#}
        </style>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-glow"></div>
            <div class="legal-content">
                <header>
                    <p class="updated-pill">{format!("Last updated: {LAST_UPDATED}")}</p>
                    <h1>{"Privacy "}<span class="grad-text-fuel">{"Policy"}</span></h1>
                    <p class="legal-intro">
                        {"This Privacy Policy explains how InfoFuel (“we,” “us,” or “our”) collects, \
                          uses, and protects information when you visit our website, interact with our \
                          funnels and automations, or use our services."}
                    </p>
                </header>

                <div class="legal-panel">
                    { legal_section("1) Information We Collect", html! {
                        <ul>
                            <li>{"Contact & account info: name, email, phone, social handles, company, role, and preferences you provide through forms and bookings."}</li>
                            <li>{"Usage & device data: pages viewed, clicks, referring pages, IP address, timestamps, approximate location, browser/OS — collected via cookies, pixels, and analytics tools."}</li>
                            <li>{"Transactional data: purchase details, invoices, support interactions."}</li>
                            <li>{"Lead & CRM data: information you submit through our funnels, calendars, chat, or integrated CRM systems."}</li>
                        </ul>
                    }) }
                    { legal_section("2) How We Use Information", html! {
                        <ul>
                            <li>{"Provide, maintain, and improve our website, offers, and client services."}</li>
                            <li>{"Personalize content, offers, and onboarding workflows."}</li>
                            <li>{"Send transactional emails, service notifications, and marketing communications (with opt-out options)."}</li>
                            <li>{"Measure performance, run A/B tests, and troubleshoot issues."}</li>
                            <li>{"Protect against fraud, abuse, and misuse; comply with legal obligations."}</li>
                        </ul>
                    }) }
                    { legal_section("3) Cookies & Similar Technologies", html! {
                        <p>
                            {"We use cookies, pixels, and local storage to remember settings, analyze \
                              traffic, and attribute conversions. You can adjust browser settings to \
                              refuse cookies; some features may not function properly without them."}
                        </p>
                    }) }
                    { legal_section("4) Sharing & Disclosures", html! {
                        <ul>
                            <li>{"Vetted providers: hosting, analytics, CRM, payment, communications, and project tools — only to the extent necessary to deliver our services."}</li>
                            <li>{"Legal & safety: if required by law, to protect rights, security, or enforce terms."}</li>
                            <li>{"Business transfers: as part of a merger, acquisition, or asset sale, with appropriate safeguards."}</li>
                        </ul>
                    }) }
                    { legal_section("5) Data Retention", html! {
                        <p>
                            {"We retain information only as long as necessary for the purposes outlined \
                              here, to comply with legal requirements, resolve disputes, and enforce \
                              agreements."}
                        </p>
                    }) }
                    { legal_section("6) Your Choices & Rights", html! {
                        <ul>
                            <li>{"Opt out of marketing emails via the unsubscribe link in those emails."}</li>
                            <li>{"Request access, correction, or deletion where applicable by law."}</li>
                            <li>{"Manage cookie preferences via your browser settings and any on-site consent tools."}</li>
                        </ul>
                    }) }
                    { legal_section("7) Security", html! {
                        <p>
                            {"We implement reasonable technical and organizational measures to safeguard \
                              personal information. No method of transmission or storage is 100% secure; \
                              we cannot guarantee absolute security."}
                        </p>
                    }) }
                    { legal_section("8) International Transfers", html! {
                        <p>
                            {"Our providers may process data in locations outside your province, state, \
                              or country. We use safeguards consistent with applicable law when \
                              transferring data."}
                        </p>
                    }) }
                    { legal_section("9) Children’s Privacy", html! {
                        <p>
                            {"Our site and services are not directed to children under 13 (or the age \
                              required by your jurisdiction). We do not knowingly collect data from \
                              children."}
                        </p>
                    }) }
                    { legal_section("10) Third-Party Links", html! {
                        <p>
                            {"Our website may link to third-party sites. Their practices are governed by \
                              their own privacy policies; we are not responsible for their content or \
                              practices."}
                        </p>
                    }) }
                    { legal_section("11) Changes to This Policy", html! {
                        <p>
                            {"We may update this Policy periodically. The “Last updated” date reflects \
                              the most recent changes. Material updates may be communicated by posting a \
                              notice on our site."}
                        </p>
                    }) }
                    { legal_section("12) Contact Us", html! {
                        <p>
                            {"Questions or requests? Email us at "}
                            <a href="mailto:hello@infofuel.io">{"hello@infofuel.io"}</a>
                            {"."}
                        </p>
                    }) }
                </div>

                <div class="back-home">
                    <a href="/">{"← Back to Home"}</a>
                </div>
            </div>
            { legal_styles() }
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-glow"></div>
            <div class="legal-content">
                <header>
                    <p class="updated-pill">{format!("Last updated: {LAST_UPDATED}")}</p>
                    <h1>{"Terms of "}<span class="grad-text-fuel">{"Service"}</span></h1>
                    <p class="legal-intro">
                        {"These Terms of Service (“Terms”) govern your access to and use of InfoFuel’s \
                          website, content, and services (“Services”). By using the Services, you agree \
                          to these Terms."}
                    </p>
                </header>

                <div class="legal-panel">
                    { legal_section("1) Eligibility & Acceptance", html! {
                        <p>
                            {"You must be at least the age of majority in your jurisdiction and have \
                              authority to accept these Terms. If you use the Services on behalf of an \
                              organization, you represent that you have authority to bind that \
                              organization."}
                        </p>
                    }) }
                    { legal_section("2) Accounts & Communications", html! {
                        <ul>
                            <li>{"You are responsible for the accuracy of information you provide and for maintaining account security."}</li>
                            <li>{"By providing contact details, you consent to receive service-related messages. You may opt out of marketing emails at any time."}</li>
                        </ul>
                    }) }
                    { legal_section("3) Services; No Professional Advice", html! {
                        <p>
                            {"Our content and consultations are for informational/educational purposes \
                              and operational support. We do not provide legal, tax, medical, accounting, \
                              or investment advice. You are responsible for decisions made based on our \
                              content or recommendations."}
                        </p>
                    }) }
                    { legal_section("4) Fees, Payments & Trials", html! {
                        <p>
                            {"Some Services may be paid. Prices, billing intervals, and refund policies \
                              will be presented at checkout or in a separate agreement or Order Form. By \
                              purchasing, you authorize us or our processors to charge the payment method \
                              you provide."}
                        </p>
                    }) }
                    { legal_section("5) User Content & License", html! {
                        <p>
                            {"If you submit or upload content, you grant InfoFuel a worldwide, \
                              non-exclusive, royalty-free license to host, use, reproduce, and display it \
                              solely to operate and improve the Services and fulfill our engagement. You \
                              represent you have rights to the content and that it does not infringe \
                              third-party rights."}
                        </p>
                    }) }
                    { legal_section("6) Intellectual Property", html! {
                        <p>
                            {"The Services, site design, text, graphics, logos, and software are owned by \
                              or licensed to InfoFuel and are protected by IP laws. Except as expressly \
                              permitted, you may not copy, modify, distribute, or create derivative works \
                              from our materials."}
                        </p>
                    }) }
                    { legal_section("7) Acceptable Use", html! {
                        <ul>
                            <li>{"No unlawful, harmful, or abusive activity; no interference with or disruption of the Services."}</li>
                            <li>{"No reverse engineering, scraping, or automated extraction except as allowed by written permission."}</li>
                            <li>{"No uploading of malicious code, or content that is illegal, defamatory, or infringes rights."}</li>
                        </ul>
                    }) }
                    { legal_section("8) Confidentiality (Client Work)", html! {
                        <p>
                            {"Each party may access the other’s non-public information in the course of \
                              an engagement. Both parties agree to protect such information and use it \
                              only as necessary to perform under the engagement, subject to legal \
                              obligations."}
                        </p>
                    }) }
                    { legal_section("9) Third-Party Services & Links", html! {
                        <p>
                            {"We may integrate third-party tools (e.g., CRM, calendars, analytics). Your \
                              use of such tools is subject to their terms and privacy policies. We are \
                              not responsible for third-party content or practices."}
                        </p>
                    }) }
                    { legal_section("10) Disclaimers", html! {
                        <p class="shout">
                            {"THE SERVICES ARE PROVIDED “AS IS” AND “AS AVAILABLE.” TO THE MAXIMUM EXTENT \
                              PERMITTED BY LAW, WE DISCLAIM ALL WARRANTIES, EXPRESS OR IMPLIED, INCLUDING \
                              MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE, AND NON-INFRINGEMENT."}
                        </p>
                    }) }
                    { legal_section("11) Limitation of Liability", html! {
                        <p class="shout">
                            {"TO THE MAXIMUM EXTENT PERMITTED BY LAW, INFOFUEL WILL NOT BE LIABLE FOR \
                              INDIRECT, INCIDENTAL, SPECIAL, CONSEQUENTIAL, EXEMPLARY, OR PUNITIVE \
                              DAMAGES, OR FOR LOST PROFITS/REVENUES. OUR TOTAL LIABILITY FOR ANY CLAIMS \
                              RELATING TO THE SERVICES WILL NOT EXCEED THE AMOUNTS YOU PAID TO US FOR THE \
                              SERVICES IN THE 3 MONTHS PRECEDING THE EVENT GIVING RISE TO THE CLAIM."}
                        </p>
                    }) }
                    { legal_section("12) Indemnification", html! {
                        <p>
                            {"You agree to defend, indemnify, and hold harmless InfoFuel and its \
                              personnel from and against claims, damages, liabilities, and expenses \
                              arising out of your use of the Services or violation of these Terms."}
                        </p>
                    }) }
                    { legal_section("13) Termination", html! {
                        <p>
                            {"We may suspend or terminate your access at any time if you violate these \
                              Terms or if required for security, legal, or operational reasons. Upon \
                              termination, provisions intended to survive will remain in effect."}
                        </p>
                    }) }
                    { legal_section("14) Changes to the Services or Terms", html! {
                        <p>
                            {"We may modify the Services or these Terms from time to time. Continued use \
                              after changes become effective constitutes acceptance of the updated Terms. \
                              We’ll reflect changes by updating the “Last updated” date."}
                        </p>
                    }) }
                    { legal_section("15) Governing Law & Dispute Resolution", html! {
                        <p>
                            {"These Terms are governed by the laws of British Columbia and applicable \
                              federal laws of Canada, without regard to conflict-of-laws rules. Courts \
                              located in British Columbia will have exclusive jurisdiction, unless \
                              otherwise agreed in a written engagement agreement."}
                        </p>
                    }) }
                    { legal_section("16) Miscellaneous", html! {
                        <ul>
                            <li>{"If any provision is unenforceable, the remainder remains in effect."}</li>
                            <li>{"No waiver of any term is a further or continuing waiver."}</li>
                            <li>{"You may not assign these Terms without our consent; we may assign as part of a restructuring or sale."}</li>
                            <li>{"These Terms constitute the entire agreement unless superseded by a signed agreement."}</li>
                        </ul>
                    }) }
                    { legal_section("17) Contact", html! {
                        <p>
                            {"Questions? Email "}
                            <a href="mailto:hello@infofuel.io">{"hello@infofuel.io"}</a>
                            {"."}
                        </p>
                    }) }
                </div>

                <div class="back-home">
                    <a href="/">{"← Back to Home"}</a>
                </div>
            </div>
            { legal_styles() }
        </div>
    }
}
