use yew::prelude::*;

use crate::components::application_form::JoinForm;
use crate::components::particle_canvas::ParticleCanvas;
use crate::components::reveal::{use_once_visible, ActivityCard, Reveal};
use crate::components::stat_counter::StatCounter;
use crate::components::toast::{use_toast, Toast};
use crate::components::typed_text::TypedText;
use crate::effects::reveal::COUNTER_START_THRESHOLD;

const ACTIVITIES: [(&str, &str); 4] = [
    ("Algorithm study", "Weekly problem sets from beginner to contest level."),
    ("Contests", "Teams for ICPC and the university programming contest."),
    ("Projects", "Small teams building web, AI and security side projects."),
    ("Hackathons", "An internal hackathon every semester, open to all members."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let (toast, show_toast) = use_toast();
    let stats_ref = use_node_ref();
    let counting = use_once_visible(stats_ref.clone(), COUNTER_START_THRESHOLD);

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <ParticleCanvas />
                <div class="hero-content">
                    <p class="hero-eyebrow">{"Computer Algorithm Network"}</p>
                    <h1 class="hero-title"><TypedText /></h1>
                    <p class="hero-subtitle">
                        {"We solve problems, ship projects and compete together."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#join" class="hero-cta">{"Join CAN"}</a>
                        <a href="#about" class="forward-link">{"Learn more"}</a>
                    </div>
                </div>
            </section>

            <Reveal id="about" class="about">
                <h2>{"About CAN"}</h2>
                <p>
                    {"CAN is the algorithm and development club of our university. "}
                    {"Weekly problem-solving sessions, study groups, hackathons and contest teams."}
                </p>
                <div class="stats" ref={stats_ref}>
                    <StatCounter target={120} label="Members" suffix="+" started={counting} />
                    <StatCounter target={48} label="Study sessions a year" started={counting} />
                    <StatCounter target={15} label="Contest awards" started={counting} />
                    <StatCounter target={9} label="Years running" started={counting} />
                </div>
            </Reveal>

            <Reveal id="activities" class="activities">
                <h2>{"What we do"}</h2>
                <div class="activity-grid">
                    { for ACTIVITIES.iter().enumerate().map(|(index, (title, body))| html! {
                        <ActivityCard {index} title={*title} body={*body} />
                    }) }
                </div>
            </Reveal>

            <Reveal id="join" class="join">
                <h2>{"Join the club"}</h2>
                <p>{"Fill in the form and we'll contact you about the next recruiting round."}</p>
                <JoinForm on_toast={show_toast} />
            </Reveal>

            <footer class="footer">
                <p>{"© CAN - Computer Algorithm Network"}</p>
            </footer>

            <Toast message={toast} />
        </div>
    }
}
