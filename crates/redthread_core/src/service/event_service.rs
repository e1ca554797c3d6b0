//! Calendar event use-cases.

use crate::calendar::CalendarDate;
use crate::model::event::Event;
use crate::model::RecordId;
use crate::repo::event_repo::EventRepository;
use crate::repo::ListQuery;
use crate::service::{ServiceError, ServiceResult};
use log::info;

pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_event(
        &self,
        title: &str,
        date: CalendarDate,
        note: Option<String>,
    ) -> ServiceResult<Event> {
        let event = Event::new(title, date, note);
        event.validate()?;
        self.repo.insert_event(&event)?;
        info!(
            "event=event_create module=service status=ok id={} date={}",
            event.id, event.date
        );
        self.repo
            .get_event(event.id)?
            .ok_or(ServiceError::InconsistentState(
                "created event not found in read-back",
            ))
    }

    /// Newest-created first.
    pub fn list_events(&self) -> ServiceResult<Vec<Event>> {
        Ok(self.repo.list_events(&ListQuery::all())?)
    }

    /// Events dated inside the month of `month_of`, ascending by date.
    pub fn events_in_month(&self, month_of: CalendarDate) -> ServiceResult<Vec<Event>> {
        let first = month_of.first_of_month();
        Ok(self
            .repo
            .list_events_between(first, first.last_of_month())?)
    }

    pub fn delete_event(&self, id: RecordId) -> ServiceResult<()> {
        self.repo.delete_event(id)?;
        info!("event=event_delete module=service status=ok id={id}");
        Ok(())
    }
}
