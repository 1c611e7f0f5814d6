//! Week navigation.
//!
//! The controller owns the [`Session`] and runs one load/render cycle per
//! honored request. State sits in `Cell`/`RefCell` so concurrent requests on
//! the same thread can observe the loading flag; a request that arrives while
//! a cycle is in flight is dropped, not queued.

pub mod shortcut;

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::calendar::{WeekLabel, WeekView};
use crate::core::models::WeekData;
use crate::errors::{Error, Result};
use crate::loader::WeekLoader;
use crate::logging::{LogTarget, Logger};
use crate::organizer::{LoggerObserver, PeriodOrganizer};
use crate::ui::html::render_document;
use crate::ui::view::{TableBuilder, TableView};
use shortcut::{NavAction, Shortcut};

/// Where a rendered week goes.
pub trait TimetableView {
    /// Called as soon as the target week is known, before its data loads.
    fn show_label(&self, label: &WeekLabel);
    fn render(&self, label: &WeekLabel, table: &TableView);
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Rendered,
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub week_start: NaiveDate,
    pub week_data: WeekData,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWeek {
    pub label: WeekLabel,
    pub table: TableView,
}

pub struct TimetableController<V: TimetableView> {
    loader: WeekLoader,
    view: V,
    logger: Logger,
    clock: Box<dyn Clock>,
    title_prefix: RefCell<String>,
    start_date: Option<NaiveDate>,
    session: RefCell<Session>,
    rendered: RefCell<Option<RenderedWeek>>,
}

impl<V: TimetableView> TimetableController<V> {
    pub fn new(loader: WeekLoader, view: V, logger: Logger) -> Self {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let week_start = WeekView::containing(clock.today()).start();
        Self {
            loader,
            view,
            logger,
            clock,
            title_prefix: RefCell::new(String::new()),
            start_date: None,
            session: RefCell::new(Session {
                week_start,
                week_data: WeekData::new(),
                loading: false,
            }),
            rendered: RefCell::new(None),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.session.get_mut().week_start = WeekView::containing(clock.today()).start();
        self.clock = Box::new(clock);
        self
    }

    pub fn with_title_prefix(self, prefix: impl Into<String>) -> Self {
        self.set_title_prefix(prefix);
        self
    }

    /// Week shown by [`start`](Self::start) instead of the current one.
    pub fn with_start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = date;
        self
    }

    pub fn set_title_prefix(&self, prefix: impl Into<String>) {
        *self.title_prefix.borrow_mut() = prefix.into();
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.session.borrow().loading
    }

    pub fn rendered(&self) -> Option<RenderedWeek> {
        self.rendered.borrow().clone()
    }

    /// First render: the configured start week, or the current one.
    pub async fn start(&self) -> NavOutcome {
        match self.start_date {
            Some(date) => {
                self.logger.info(
                    format!("Starting at configured week of {date}"),
                    LogTarget::FileOnly,
                );
                self.guarded(WeekView::containing(date)).await
            }
            None => self.go_to_current_week().await,
        }
    }

    /// Move by whole weeks; negative goes back.
    pub async fn navigate(&self, direction: i64) -> NavOutcome {
        let current = WeekView::containing(self.session.borrow().week_start);
        self.guarded(current.shifted(direction)).await
    }

    pub async fn go_to_current_week(&self) -> NavOutcome {
        self.guarded(WeekView::containing(self.clock.today())).await
    }

    pub async fn handle_shortcut(&self, shortcut: Shortcut) -> NavOutcome {
        match shortcut.action() {
            Some(NavAction::PreviousWeek) => self.navigate(-1).await,
            Some(NavAction::NextWeek) => self.navigate(1).await,
            Some(NavAction::CurrentWeek) => self.go_to_current_week().await,
            None => {
                self.logger
                    .debug(format!("Shortcut {shortcut} has no binding"));
                NavOutcome::Ignored
            }
        }
    }

    /// Write the table on screen to `<exports_dir>/timetable-YYYYMMDD.html`.
    pub fn print(&self, exports_dir: &Path) -> Result<PathBuf> {
        let rendered = self.rendered.borrow();
        let Some(week) = rendered.as_ref() else {
            return Err(Error::Domain("Nothing has been rendered yet.".into()));
        };
        fs::create_dir_all(exports_dir)?;
        let week_start = self.session.borrow().week_start;
        let path = exports_dir.join(format!("timetable-{}.html", week_start.format("%Y%m%d")));
        fs::write(&path, render_document(&week.label, &week.table).into_string())?;
        self.logger.info(
            format!("Timetable exported to {}", path.display()),
            LogTarget::FileOnly,
        );
        Ok(path)
    }

    async fn guarded(&self, week: WeekView) -> NavOutcome {
        {
            let mut session = self.session.borrow_mut();
            if session.loading {
                drop(session);
                self.logger
                    .debug("Navigation ignored: a week is still loading");
                return NavOutcome::Ignored;
            }
            session.loading = true;
            session.week_start = week.start();
        }

        self.cycle(week).await;

        self.session.borrow_mut().loading = false;
        NavOutcome::Rendered
    }

    async fn cycle(&self, week: WeekView) {
        let label = week.label(&self.title_prefix.borrow());
        self.logger
            .info(format!("Showing {} ({})", label.title, label.range), LogTarget::FileOnly);
        self.view.show_label(&label);

        let keys = week.keys();
        let data = self.loader.load(&keys).await;

        let observer = LoggerObserver::new(self.logger.clone());
        let periods = PeriodOrganizer::new(&observer).organize(&data, &keys);
        let table = TableBuilder::new().build(&week, &periods);
        self.view.render(&label, &table);

        self.session.borrow_mut().week_data = data;
        *self.rendered.borrow_mut() = Some(RenderedWeek { label, table });
    }
}
