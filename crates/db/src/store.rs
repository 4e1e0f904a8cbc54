//! PostgreSQL implementation of the scheduling store.
//!
//! Bookings run inside one transaction that first takes a transaction-scoped
//! advisory lock keyed by the employee, so concurrent requests for the same
//! professional are serialised between the overlap check and the insert. The
//! overlap decision is [`find_conflict`] over the employee's agenda around the
//! requested slot. The partial unique index on `(employee_id, start_time)` is a
//! second line for writers that bypass this store.

use async_trait::async_trait;
use salon_core::{
    errors::{SalonError, SalonResult},
    models::{
        appointment::{Appointment, AppointmentStatus},
        service::{Service, MAX_SERVICE_DURATION_MINUTES},
        user::User,
    },
    scheduling::{find_conflict, NewAppointment, SchedulingStore, TimeRange},
};
use chrono::{Duration, NaiveDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::{db_error, report_violation, ConstraintViolation},
    models::convert_all,
    repositories::{appointment, service, user},
    schema::APPOINTMENT_SLOT_INDEX,
    DbPool,
};

#[derive(Debug, Clone)]
pub struct PgSchedulingStore {
    pool: DbPool,
}

impl PgSchedulingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Earliest start an appointment can have and still overlap `slot`.
/// Appointments never last longer than [`MAX_SERVICE_DURATION_MINUTES`].
fn agenda_window_start(slot: &TimeRange) -> NaiveDateTime {
    slot.start
        .checked_sub_signed(Duration::minutes(i64::from(MAX_SERVICE_DURATION_MINUTES)))
        .unwrap_or(NaiveDateTime::MIN)
}

fn slot_conflict(employee_id: Uuid, existing: Option<Uuid>) -> SalonError {
    match existing {
        Some(id) => SalonError::Conflict(format!(
            "Employee {} already has appointment {} in this time slot",
            employee_id, id
        )),
        None => SalonError::Conflict(format!(
            "Employee {} already has an appointment in this time slot",
            employee_id
        )),
    }
}

#[async_trait]
impl SchedulingStore for PgSchedulingStore {
    async fn find_service(&self, id: Uuid) -> SalonResult<Option<Service>> {
        let service = service::get_service_by_id(&self.pool, id).await?;
        Ok(service.map(Service::from))
    }

    async fn find_user(&self, id: Uuid) -> SalonResult<Option<User>> {
        let user = user::get_user_by_id(&self.pool, id).await?;
        Ok(user.map(User::try_from).transpose()?)
    }

    async fn insert_if_free(&self, new: NewAppointment) -> SalonResult<Appointment> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        appointment::lock_employee_agenda(&mut *tx, new.employee_id).await?;

        let agenda: Vec<Appointment> = convert_all(
            appointment::get_employee_agenda(
                &mut *tx,
                new.employee_id,
                agenda_window_start(&new.slot),
                new.slot.end,
            )
            .await?,
        )?;

        if let Some(existing) = find_conflict(&agenda, new.employee_id, &new.slot) {
            debug!(
                "Rejecting booking for employee {}: overlaps appointment {}",
                new.employee_id, existing.id
            );
            return Err(slot_conflict(new.employee_id, Some(existing.id)));
        }

        let inserted = appointment::insert_appointment(
            &mut *tx,
            &new.client_name,
            new.service_id,
            new.employee_id,
            new.slot.start,
            new.slot.end,
        )
        .await
        .map_err(|report| match report_violation(&report) {
            Some(ConstraintViolation::Unique(Some(ref name))) if name == APPOINTMENT_SLOT_INDEX => {
                slot_conflict(new.employee_id, None)
            }
            _ => SalonError::Database(report),
        })?;

        tx.commit().await.map_err(db_error)?;

        Ok(Appointment::try_from(inserted)?)
    }

    async fn find_appointment(&self, id: Uuid) -> SalonResult<Option<Appointment>> {
        let found = appointment::get_appointment_by_id(&self.pool, id).await?;
        Ok(found.map(Appointment::try_from).transpose()?)
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: AppointmentStatus,
        status: AppointmentStatus,
    ) -> SalonResult<Option<Appointment>> {
        let updated =
            appointment::update_status_if(&self.pool, id, expected.as_str(), status.as_str())
                .await?;
        Ok(updated.map(Appointment::try_from).transpose()?)
    }

    async fn active_in_range(
        &self,
        range: TimeRange,
        employee_id: Option<Uuid>,
    ) -> SalonResult<Vec<Appointment>> {
        let rows = appointment::get_active_appointments_starting_between(
            &self.pool,
            range.start,
            range.end,
            employee_id,
        )
        .await?;
        Ok(convert_all(rows)?)
    }
}
