//! The whole page as a markup tree.
//!
//! Interactive parts are tagged with the ids and data attributes from
//! [`crate::constants`]; the web frontend attaches behaviour to those.

use crate::config::SiteConfig;
use crate::constants::*;
use crate::content::{
    Experience, Project, SkillCategory, ABOUT_PARAGRAPHS, CONTACT, EDUCATION, EXPERIENCES, HERO,
    NAV_ITEMS, PROJECTS, SKILL_CATEGORIES,
};
use crate::markup::{el, svg, ElementNode};
use crate::menu::MenuState;
use crate::motion::Entrance;
use crate::reveal::RevealTrigger;
use crate::scroll::ScrollState;

/// Anchor id for a section title: lowercase, whitespace runs become `-`.
pub fn section_id(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[inline]
pub fn anchor_href(title: &str) -> String {
    format!("#{}", section_id(title))
}

/// Mark a block for one-shot reveal; it starts in the entrance's initial style.
fn reveal(node: ElementNode, trigger: RevealTrigger, entrance: Entrance) -> ElementNode {
    node.attr(DATA_REVEAL, trigger.threshold.to_string())
        .style(entrance.initial_style())
        .attr(DATA_REVEAL_STYLE, entrance.revealed_style())
}

/// Animated with the closest enclosing reveal block rather than on its own.
fn follower(node: ElementNode, entrance: Entrance) -> ElementNode {
    node.attr(DATA_REVEAL_FOLLOW, "")
        .style(entrance.initial_style())
        .attr(DATA_REVEAL_STYLE, entrance.revealed_style())
}

fn in_page_link(label: &str, class: &str) -> ElementNode {
    el("a")
        .attr("href", anchor_href(label))
        .attr(DATA_NAV_LINK, "")
        .class(class)
        .text(label)
}

fn tag_list(tags: &[&str]) -> ElementNode {
    el("div").class("flex flex-wrap gap-2 mt-3").children(tags.iter().map(|t| {
        el("span")
            .class("px-3 py-1 bg-gray-900 text-gray-300 rounded-full text-xs")
            .text(*t)
    }))
}

/// Inline icon slot, 24-unit viewBox; `name` is kept in `data-icon`.
fn icon(name: &str, size: u32, class: &str) -> ElementNode {
    svg("svg")
        .class(class)
        .attr("data-icon", name)
        .attr("width", size.to_string())
        .attr("height", size.to_string())
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("aria-hidden", "true")
        .child(
            svg("rect")
                .attr("x", "3")
                .attr("y", "3")
                .attr("width", "18")
                .attr("height", "18")
                .attr("rx", "4"),
        )
}

fn backdrop() -> ElementNode {
    el("div")
        .class("absolute inset-0 z-0")
        .attr("aria-hidden", "true")
        .child(el("div").class("absolute top-0 left-0 w-full h-full bg-amber-500 opacity-5"))
        .child(el("div").class(
            "absolute bottom-0 right-0 w-2/3 h-2/3 bg-amber-500 opacity-5 rounded-full blur-3xl",
        ))
}

pub fn nav(config: &SiteConfig) -> ElementNode {
    let menu = MenuState::default();
    let desktop_links = NAV_ITEMS.iter().map(|item| {
        in_page_link(
            item.label,
            "text-white hover:text-gray-300 transition-colors duration-200 font-medium",
        )
    });
    let mobile_links = NAV_ITEMS.iter().map(|item| {
        in_page_link(
            item.label,
            "block py-2 text-white hover:text-gray-300 transition-colors duration-200 font-medium",
        )
    });

    let icon = svg("svg")
        .class("h-6 w-6")
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke", "currentColor")
        .child(
            svg("path")
                .id(MENU_ICON_ID)
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", menu.icon_path()),
        );

    let blur = format!(
        "backdrop-filter:blur({px}px);-webkit-backdrop-filter:blur({px}px);",
        px = NAV_BLUR_PX
    );

    el("nav")
        .id(NAV_ID)
        .class(ScrollState::default().nav_class())
        .style(blur)
        .child(
            el("div").class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8").child(
                el("div")
                    .class("flex items-center justify-between")
                    .child(
                        el("div").class("flex-shrink-0").child(
                            el("a")
                                .attr("href", config.site_path(""))
                                .class("text-xl font-bold text-white")
                                .text(BRAND),
                        ),
                    )
                    .child(
                        el("div")
                            .class("hidden md:flex flex-1 justify-center")
                            .child(
                                el("div")
                                    .class("flex items-center space-x-8")
                                    .children(desktop_links),
                            ),
                    )
                    .child(
                        el("div").class("md:hidden").child(
                            el("button")
                                .id(MENU_TOGGLE_ID)
                                .attr("type", "button")
                                .attr("aria-controls", MOBILE_MENU_ID)
                                .attr("aria-expanded", menu.is_open().to_string())
                                .attr("aria-label", menu.toggle_label())
                                .class("text-white hover:text-gray-300 focus:outline-none")
                                .child(icon),
                        ),
                    ),
            ),
        )
        .child(
            el("div")
                .id(MOBILE_MENU_ID)
                .class("md:hidden pt-2 pb-3 space-y-1 px-4 bg-black/30 backdrop-blur-md")
                .attr("hidden", "")
                .children(mobile_links),
        )
}

pub fn hero(config: &SiteConfig) -> ElementNode {
    el("div")
        .id(HERO_ID)
        .class("relative w-full h-screen overflow-hidden bg-black")
        .child(nav(config))
        .child(
            el("div")
                .id(HEX_GRID_ID)
                .class("absolute inset-0")
                .attr("aria-hidden", "true"),
        )
        .child(
            el("div")
                .class("absolute inset-0 pointer-events-none")
                .attr("aria-hidden", "true")
                .child(
                    // stays hidden until the first pointer measurement
                    el("div")
                        .id(HERO_GLOW_ID)
                        .class("absolute rounded-full w-64 h-64 blur-3xl opacity-10 bg-amber-300")
                        .attr("hidden", ""),
                ),
        )
        .child(
            el("div")
                .class("relative flex items-center justify-center w-full h-full z-10")
                .child(
                    el("div")
                        .class("text-center max-w-3xl mx-auto px-4")
                        .child(
                            el("h1")
                                .class("text-5xl md:text-6xl font-bold text-white mb-6 tracking-tight")
                                .child(el("span").class("text-amber-300").text(HERO.first_name))
                                .text(format!(" {}", HERO.last_name)),
                        )
                        .child(el("p").class("text-xl text-gray-300 mb-8").text(HERO.tagline))
                        .child(
                            el("div")
                                .class("flex flex-col md:flex-row gap-4 justify-center")
                                .child(
                                    el("a")
                                        .attr("href", anchor_href("About Me"))
                                        .attr(DATA_NAV_LINK, "")
                                        .class("px-8 py-3 bg-amber-700 hover:bg-amber-800 text-white font-medium rounded-sm transition-colors shadow-lg")
                                        .text("About me"),
                                )
                                .child(
                                    el("a")
                                        .attr("href", anchor_href("Contact"))
                                        .attr(DATA_NAV_LINK, "")
                                        .class("px-8 py-3 bg-transparent border border-amber-300 text-amber-300 font-medium rounded-sm hover:bg-amber-900/30 transition-colors")
                                        .text("Contact"),
                                ),
                        ),
                ),
        )
}

fn section(title: &str, icon_name: &str, bg: &str, body: ElementNode) -> ElementNode {
    let header = el("div")
        .class("flex items-center space-x-3")
        .child(icon(icon_name, 28, "text-amber-300"))
        .child(el("h2").class("text-3xl font-bold").text(title))
        .child(el("div").class("h-px bg-amber-400 flex-grow ml-4"));

    el("section")
        .id(section_id(title))
        .class(format!("py-20 {} relative overflow-hidden", bg))
        .child(backdrop())
        .child(reveal(
            el("div")
                .class("container mx-auto px-4 z-10 relative")
                .child(header)
                .child(body),
            RevealTrigger::SECTION,
            Entrance::section(),
        ))
}

fn about() -> ElementNode {
    let last = ABOUT_PARAGRAPHS.len().saturating_sub(1);
    let block = el("div")
        .class("mt-12 bg-gray-900 border border-amber-500/10 rounded-xl p-8 shadow-lg shadow-amber-500/5 max-w-4xl mx-auto")
        .children(ABOUT_PARAGRAPHS.iter().enumerate().map(|(i, p)| {
            let class = if i == last {
                "text-gray-300 text-lg"
            } else {
                "text-gray-300 mb-6 text-lg"
            };
            el("p").class(class).text(*p)
        }));
    section(
        "About Me",
        "brain-circuit",
        "bg-gray-950",
        reveal(block, RevealTrigger::SECTION, Entrance::rise()),
    )
}

pub fn timeline_item(index: usize, exp: &Experience) -> ElementNode {
    let side = if index % 2 == 0 {
        "md:mr-auto md:pr-8"
    } else {
        "md:ml-auto md:pl-8"
    };
    let card = el("div")
        .class("bg-gray-800 rounded-lg p-6 border border-amber-500/10 shadow-lg hover:shadow-amber-500/10 transition-all duration-300 hover:-translate-y-1")
        .child(
            el("div")
                .class("flex flex-col md:flex-row justify-between items-start md:items-center mb-4")
                .child(el("h3").class("text-xl font-bold").text(exp.title))
                .child(
                    el("span")
                        .class("px-3 py-1 bg-amber-500/10 text-amber-300 rounded-full text-xs mt-2 md:mt-0")
                        .text(exp.period),
                ),
        )
        .child(el("p").class("text-amber-300 font-medium mb-3").text(exp.company))
        .child(el("p").class("text-gray-300 mb-4").text(exp.description))
        .child(tag_list(exp.tags));

    el("div")
        .class("relative mb-16")
        .attr(DATA_REVEAL, RevealTrigger::TIMELINE.threshold.to_string())
        .child(
            el("div")
                .class("absolute left-0 md:left-1/2 transform md:-translate-x-1/2 top-7 w-4 h-4 rounded-full bg-amber-400 border-4 border-gray-900 z-10")
                .attr(DATA_REVEAL_FOLLOW, "")
                .attr(DATA_REVEAL_CLASS, "animate-pulse"),
        )
        .child(follower(
            el("div")
                .class(format!(
                    "md:w-1/2 {} ml-6 pl-6 md:pl-0 border-l border-amber-500/30 md:border-l-0",
                    side
                ))
                .child(card),
            Entrance::timeline(index),
        ))
}

fn experience() -> ElementNode {
    let timeline = el("div")
        .class("relative mt-12")
        .child(el("div").class(
            "absolute left-0 md:left-1/2 transform md:-translate-x-1/2 top-0 h-full w-px bg-amber-500/30",
        ))
        .children(EXPERIENCES.iter().enumerate().map(|(i, e)| timeline_item(i, e)));
    section("Experience", "briefcase", "bg-gray-900", timeline)
}

fn education() -> ElementNode {
    let card = el("div")
        .class("bg-gray-900 border border-amber-500/10 rounded-xl p-8 shadow-lg shadow-amber-500/5 w-full max-w-3xl mx-auto")
        .child(
            el("div")
                .class("flex flex-col md:flex-row justify-between items-start md:items-center")
                .child(
                    el("div")
                        .child(el("h3").class("text-2xl font-bold").text(EDUCATION.school))
                        .child(el("p").class("text-amber-300 mt-1").text(EDUCATION.degree)),
                )
                .child(
                    el("div").class("mt-2 md:mt-0").child(
                        el("span")
                            .class("px-4 py-1 bg-amber-500/10 text-amber-300 rounded-full text-sm")
                            .text(EDUCATION.years),
                    ),
                ),
        );
    section(
        "Education",
        "graduation-cap",
        "bg-gray-950",
        reveal(card, RevealTrigger::SECTION, Entrance::rise()),
    )
}

pub fn project_card(project: &Project) -> ElementNode {
    let card = el("div")
        .class("bg-gray-800 rounded-xl overflow-hidden border border-amber-500/10 shadow-lg hover:shadow-amber-500/15 transition-all duration-300 hover:-translate-y-2 group")
        .child(
            el("div")
                .class("p-6")
                .child(
                    el("h3")
                        .class("text-xl font-bold group-hover:text-amber-300 transition-colors duration-300")
                        .text(project.title),
                )
                .child(el("p").class("text-gray-300 mb-4").text(project.description))
                .child(tag_list(project.tags)),
        );
    reveal(card, RevealTrigger::CARD, Entrance::rise())
}

fn projects() -> ElementNode {
    let grid = el("div")
        .class("mt-12 grid grid-cols-1 md:grid-cols-2 gap-8")
        .children(PROJECTS.iter().map(project_card));
    section("Projects", "laptop", "bg-gray-900", grid)
}

pub fn skill_card(category: &SkillCategory) -> ElementNode {
    let items = category.skills.iter().enumerate().map(|(i, skill)| {
        follower(
            el("li")
                .class("text-gray-300 flex items-center")
                .child(el("span").class("w-1.5 h-1.5 bg-amber-300 rounded-full mr-2"))
                .text(*skill),
            Entrance::skill_item(i),
        )
    });
    let card = el("div")
        .class("bg-gray-800 rounded-lg p-6 border border-amber-500/10 shadow-lg hover:shadow-amber-500/15 transition-all duration-300 hover:-translate-y-1")
        .attr("data-skill-category", section_id(category.title))
        .child(
            el("div")
                .class("flex items-center space-x-3 mb-4")
                .child(
                    el("div")
                        .class("p-2 bg-amber-500/10 rounded-lg text-amber-300")
                        .child(icon(category.icon, 24, "shrink-0")),
                )
                .child(el("h3").class("text-lg font-bold").text(category.title)),
        )
        .child(el("ul").class("space-y-2").children(items));
    reveal(card, RevealTrigger::CARD, Entrance::skill_card())
}

fn skills() -> ElementNode {
    let grid = el("div")
        .class("mt-12 grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6")
        .children(SKILL_CATEGORIES.iter().map(skill_card));
    section("Skills", "cpu", "bg-gray-950", grid)
}

fn contact() -> ElementNode {
    let links = el("div")
        .class("flex flex-col md:flex-row justify-center items-center space-y-4 md:space-y-0 md:space-x-6")
        .child(
            el("a")
                .attr("href", format!("mailto:{}", CONTACT.email))
                .class("px-8 py-4 bg-amber-700 text-white rounded-sm font-bold hover:bg-amber-800 transition-colors w-full md:w-auto shadow-lg")
                .text(CONTACT.email),
        )
        .child(
            el("a")
                .attr("href", CONTACT.profile_url)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .class("px-8 py-4 bg-transparent border border-amber-300 text-amber-300 rounded-sm font-bold hover:bg-amber-900/30 transition-colors w-full md:w-auto")
                .text(CONTACT.profile_label),
        );

    el("section")
        .id(section_id("Contact"))
        .class("py-20 bg-gray-900 relative overflow-hidden")
        .child(backdrop())
        .child(reveal(
            el("div")
                .class("container mx-auto px-4 z-10 relative text-center")
                .child(el("h2").class("text-3xl font-bold mb-6").text(CONTACT.heading))
                .child(
                    el("p")
                        .class("text-xl text-gray-300 mb-10 max-w-2xl mx-auto")
                        .text(CONTACT.blurb),
                )
                .child(links),
            RevealTrigger::SECTION,
            Entrance::section(),
        ))
}

/// Root of everything mounted into `#app`.
pub fn page(config: &SiteConfig) -> ElementNode {
    el("div")
        .class("min-h-screen bg-gray-900 text-white")
        .child(hero(config))
        .child(
            el("main")
                .class("bg-gray-900 scroll-smooth text-white")
                .child(about())
                .child(experience())
                .child(education())
                .child(projects())
                .child(skills())
                .child(contact()),
        )
}
