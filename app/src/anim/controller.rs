use crate::anim::counter::{self, CounterAnimation, StatPattern};
use crate::anim::effects::{self, Rect, Ripple};
use crate::anim::menu::MenuState;
use crate::anim::navbar::NavbarState;
use crate::anim::pipeline::{self, PipelineCycler};
use crate::anim::reveal::{self, RevealSet};
use crate::anim::scheduler::{Firing, Scheduler, TimerHandle};
use crate::anim::throttle::{self, Throttle};
use crate::anim::typewriter::{self, Typewriter};
use std::time::Duration;

/// Fixed-navbar compensation subtracted from anchor scroll targets.
pub const ANCHOR_OFFSET_PX: f64 = 80.0;

const ACTIVE: &str = "active";
const ANIMATE_IN: &str = "animate-in";
const LOADED: &str = "loaded";
const SCROLLED: &str = "scrolled";

/// What the page contains. A controller wired without an element simply
/// never emits commands for it.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    pub has_navbar: bool,
    pub has_menu: bool,
    pub has_hero: bool,
    pub hero_title: Option<String>,
    pub pipeline_steps: usize,
    pub stat_texts: Vec<String>,
    pub animate_elements: usize,
    pub feature_cards: usize,
    pub buttons: usize,
}

/// Addressable page elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Body,
    Navbar,
    Hamburger,
    NavMenu,
    Hero,
    HeroTitle,
    PipelineStep(usize),
    Stat(usize),
    AnimateElement(usize),
    FeatureCard(usize),
}

/// Everything the browser binding feeds into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Window load
    Load,
    /// Scroll with the current vertical offset
    Scroll { offset: f64 },
    HamburgerClick,
    NavLinkClick,
    Escape,
    /// Click on an in-page hash link; `target_top` is the target's offset
    AnchorClick { target_top: f64 },
    /// An animate-eligible element crossed the 10% visibility threshold
    ElementVisible { index: usize },
    /// The pipeline diagram became at least half visible
    PipelineVisible,
    /// The stats section became at least half visible
    StatsVisible,
    CardHover { index: usize, entered: bool },
    ButtonClick { index: usize, rect: Rect, x: f64, y: f64 },
    /// Clock advanced; due timers fire
    Tick,
}

/// Side effects for the binding to apply to the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum DomCommand {
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    SetTransform { target: Target, transform: String },
    SetText { target: Target, text: String },
    ScrollTo { top: f64 },
    SpawnRipple { button: usize, ripple: Ripple },
    RemoveRipple { button: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    TypewriterStart,
    TypewriterTick,
    PipelineTick,
    CounterStart(usize),
    CounterTick(usize),
    RevealElement(usize),
    RippleExpire(usize),
}

/// The page's animation behaviors as one explicit state machine: events
/// in, DOM commands out, time injected by the caller. Replaces the
/// original page's top-level mutable globals and anonymous timers.
#[derive(Debug)]
pub struct AnimationController {
    model: PageModel,
    scheduler: Scheduler<TimerKind>,
    menu: MenuState,
    navbar: NavbarState,
    reveals: RevealSet,
    scroll_throttle: Throttle,
    pipeline: Option<PipelineCycler>,
    pipeline_handle: Option<TimerHandle>,
    pipeline_started: bool,
    typewriter: Option<Typewriter>,
    typewriter_handle: Option<TimerHandle>,
    stat_patterns: Vec<Option<StatPattern>>,
    counters: Vec<Option<CounterAnimation>>,
    counter_handles: Vec<Option<TimerHandle>>,
    stats_started: bool,
}

impl AnimationController {
    pub fn new(model: PageModel) -> Self {
        let stats = model.stat_texts.len();
        Self {
            reveals: RevealSet::new(model.animate_elements),
            scroll_throttle: Throttle::new(throttle::SCROLL_WINDOW),
            scheduler: Scheduler::new(),
            menu: MenuState::new(),
            navbar: NavbarState::new(),
            pipeline: None,
            pipeline_handle: None,
            pipeline_started: false,
            typewriter: None,
            typewriter_handle: None,
            stat_patterns: vec![None; stats],
            counters: (0..stats).map(|_| None).collect(),
            counter_handles: vec![None; stats],
            stats_started: false,
            model,
        }
    }

    /// Process one page event at the given elapsed time.
    pub fn handle(&mut self, event: PageEvent, now: Duration) -> Vec<DomCommand> {
        let mut out = Vec::new();
        match event {
            PageEvent::Load => self.on_load(now, &mut out),
            PageEvent::Scroll { offset } => self.on_scroll(offset, now, &mut out),
            PageEvent::HamburgerClick => self.on_hamburger(&mut out),
            PageEvent::NavLinkClick | PageEvent::Escape => self.on_menu_close(&mut out),
            PageEvent::AnchorClick { target_top } => {
                out.push(DomCommand::ScrollTo {
                    top: target_top - ANCHOR_OFFSET_PX,
                });
            }
            PageEvent::ElementVisible { index } => self.reveal(index, &mut out),
            PageEvent::PipelineVisible => self.on_pipeline_visible(now),
            PageEvent::StatsVisible => self.on_stats_visible(now, &mut out),
            PageEvent::CardHover { index, entered } => {
                if index < self.model.feature_cards {
                    let transform = if entered {
                        effects::HOVER_LIFT
                    } else {
                        effects::HOVER_REST
                    };
                    out.push(DomCommand::SetTransform {
                        target: Target::FeatureCard(index),
                        transform: transform.to_string(),
                    });
                }
            }
            PageEvent::ButtonClick { index, rect, x, y } => {
                if index < self.model.buttons {
                    out.push(DomCommand::SpawnRipple {
                        button: index,
                        ripple: Ripple::at(rect, x, y),
                    });
                    self.scheduler.once(
                        now,
                        effects::RIPPLE_LIFETIME,
                        TimerKind::RippleExpire(index),
                    );
                }
            }
            PageEvent::Tick => {
                while let Some(firing) = self.scheduler.pop_due(now) {
                    self.fire(firing, &mut out);
                }
            }
        }
        out
    }

    /// Cancel the pipeline cycling timer. The page binding never calls
    /// this (the diagram cycles for the lifetime of the page), but
    /// teardown is possible.
    pub fn stop_pipeline(&mut self) -> bool {
        match self.pipeline_handle.take() {
            Some(handle) => self.scheduler.cancel(handle),
            None => false,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    fn on_load(&mut self, now: Duration, out: &mut Vec<DomCommand>) {
        out.push(DomCommand::AddClass {
            target: Target::Body,
            class: LOADED,
        });

        if self.model.hero_title.is_some() {
            self.scheduler
                .once(now, typewriter::START_DELAY, TimerKind::TypewriterStart);
        }

        for (index, delay) in reveal::load_schedule(self.model.animate_elements) {
            self.scheduler
                .once(now, delay, TimerKind::RevealElement(index));
        }
    }

    fn on_scroll(&mut self, offset: f64, now: Duration, out: &mut Vec<DomCommand>) {
        if self.model.has_navbar {
            let update = self.navbar.on_scroll(offset);
            out.push(DomCommand::SetTransform {
                target: Target::Navbar,
                transform: update.transform.to_string(),
            });
            out.push(if update.scrolled {
                DomCommand::AddClass {
                    target: Target::Navbar,
                    class: SCROLLED,
                }
            } else {
                DomCommand::RemoveClass {
                    target: Target::Navbar,
                    class: SCROLLED,
                }
            });
        }

        if self.model.has_hero {
            out.push(DomCommand::SetTransform {
                target: Target::Hero,
                transform: format!("translateY({}px)", effects::parallax_translate(offset)),
            });
        }

        // Supplementary scroll work goes behind the throttle; there is
        // nothing gated yet but the window still advances.
        self.scroll_throttle.admit(now);
    }

    fn on_hamburger(&mut self, out: &mut Vec<DomCommand>) {
        if !self.model.has_menu {
            return;
        }
        let open = self.menu.toggle();
        for target in [Target::Hamburger, Target::NavMenu] {
            out.push(if open {
                DomCommand::AddClass {
                    target,
                    class: ACTIVE,
                }
            } else {
                DomCommand::RemoveClass {
                    target,
                    class: ACTIVE,
                }
            });
        }
    }

    fn on_menu_close(&mut self, out: &mut Vec<DomCommand>) {
        if !self.model.has_menu {
            return;
        }
        // Removal regardless of current state, same as the page binding
        self.menu.close();
        for target in [Target::Hamburger, Target::NavMenu] {
            out.push(DomCommand::RemoveClass {
                target,
                class: ACTIVE,
            });
        }
    }

    fn reveal(&mut self, index: usize, out: &mut Vec<DomCommand>) {
        if self.reveals.enter(index) {
            out.push(DomCommand::AddClass {
                target: Target::AnimateElement(index),
                class: ANIMATE_IN,
            });
        }
    }

    fn on_pipeline_visible(&mut self, now: Duration) {
        // One-shot: the visibility observer unsubscribes after first firing
        if self.pipeline_started || self.model.pipeline_steps == 0 {
            return;
        }
        self.pipeline_started = true;
        self.pipeline = Some(PipelineCycler::new(self.model.pipeline_steps));
        self.pipeline_handle = Some(self.scheduler.every(
            now,
            pipeline::CYCLE_PERIOD,
            TimerKind::PipelineTick,
        ));
    }

    fn on_stats_visible(&mut self, now: Duration, out: &mut Vec<DomCommand>) {
        if self.stats_started {
            return;
        }
        self.stats_started = true;
        for (index, text) in self.model.stat_texts.iter().enumerate() {
            let Some(pattern) = StatPattern::parse(text) else {
                continue;
            };
            out.push(DomCommand::SetText {
                target: Target::Stat(index),
                text: pattern.placeholder(),
            });
            self.stat_patterns[index] = Some(pattern);
            self.scheduler
                .once(now, counter::START_DELAY, TimerKind::CounterStart(index));
        }
    }

    fn fire(&mut self, firing: Firing<TimerKind>, out: &mut Vec<DomCommand>) {
        match firing.tag {
            TimerKind::TypewriterStart => {
                let Some(title) = self.model.hero_title.clone() else {
                    return;
                };
                self.typewriter = Some(Typewriter::new(title));
                out.push(DomCommand::SetText {
                    target: Target::HeroTitle,
                    text: String::new(),
                });
                self.typewriter_handle = Some(self.scheduler.every(
                    firing.at,
                    typewriter::CHAR_INTERVAL,
                    TimerKind::TypewriterTick,
                ));
            }
            TimerKind::TypewriterTick => {
                let Some(tw) = self.typewriter.as_mut() else {
                    return;
                };
                match tw.tick() {
                    Some(visible) => out.push(DomCommand::SetText {
                        target: Target::HeroTitle,
                        text: visible.to_string(),
                    }),
                    None => {
                        if let Some(handle) = self.typewriter_handle.take() {
                            self.scheduler.cancel(handle);
                        }
                    }
                }
            }
            TimerKind::PipelineTick => {
                let Some(cycler) = self.pipeline.as_mut() else {
                    return;
                };
                let Some(active_through) = cycler.tick() else {
                    return;
                };
                for step in 0..cycler.len() {
                    out.push(DomCommand::RemoveClass {
                        target: Target::PipelineStep(step),
                        class: ACTIVE,
                    });
                }
                for step in 0..=active_through {
                    out.push(DomCommand::AddClass {
                        target: Target::PipelineStep(step),
                        class: ACTIVE,
                    });
                }
            }
            TimerKind::CounterStart(index) => {
                let Some(pattern) = self.stat_patterns.get(index).cloned().flatten() else {
                    return;
                };
                self.counters[index] = Some(CounterAnimation::new(pattern));
                self.counter_handles[index] = Some(self.scheduler.every(
                    firing.at,
                    counter::TICK_INTERVAL,
                    TimerKind::CounterTick(index),
                ));
            }
            TimerKind::CounterTick(index) => {
                let Some(counter) = self.counters.get_mut(index).and_then(Option::as_mut) else {
                    return;
                };
                match counter.tick() {
                    Some(text) => out.push(DomCommand::SetText {
                        target: Target::Stat(index),
                        text,
                    }),
                    None => {
                        if let Some(handle) = self.counter_handles[index].take() {
                            self.scheduler.cancel(handle);
                        }
                    }
                }
            }
            TimerKind::RevealElement(index) => self.reveal(index, out),
            TimerKind::RippleExpire(button) => {
                out.push(DomCommand::RemoveRipple { button });
            }
        }
    }
}
