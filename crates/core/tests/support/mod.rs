#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use salon_core::{
    errors::{SalonError, SalonResult},
    models::{
        appointment::{Appointment, AppointmentStatus},
        service::Service,
        user::{Role, User},
    },
    scheduling::{find_conflict, NewAppointment, SchedulingStore, TimeRange},
};
use uuid::Uuid;

/// Store backed by in-process maps, enough to exercise the engine end to end.
#[derive(Default)]
pub struct MemoryStore {
    services: Mutex<HashMap<Uuid, Service>>,
    users: Mutex<HashMap<Uuid, User>>,
    appointments: Mutex<Vec<Appointment>>,
}

impl MemoryStore {
    pub fn add_service(&self, service: Service) {
        self.services.lock().unwrap().insert(service.id, service);
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchedulingStore for MemoryStore {
    async fn find_service(&self, id: Uuid) -> SalonResult<Option<Service>> {
        Ok(self.services.lock().unwrap().get(&id).cloned())
    }

    async fn find_user(&self, id: Uuid) -> SalonResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn insert_if_free(&self, appointment: NewAppointment) -> SalonResult<Appointment> {
        let mut appointments = self.appointments.lock().unwrap();
        if let Some(existing) =
            find_conflict(appointments.iter(), appointment.employee_id, &appointment.slot)
        {
            return Err(SalonError::Conflict(format!(
                "Overlaps appointment {}",
                existing.id
            )));
        }
        let created = Appointment {
            id: Uuid::new_v4(),
            client_name: appointment.client_name,
            service_id: appointment.service_id,
            employee_id: appointment.employee_id,
            start_time: appointment.slot.start,
            end_time: appointment.slot.end,
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
        };
        appointments.push(created.clone());
        Ok(created)
    }

    async fn find_appointment(&self, id: Uuid) -> SalonResult<Option<Appointment>> {
        Ok(self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: AppointmentStatus,
        status: AppointmentStatus,
    ) -> SalonResult<Option<Appointment>> {
        let mut appointments = self.appointments.lock().unwrap();
        Ok(appointments
            .iter_mut()
            .find(|appointment| appointment.id == id && appointment.status == expected)
            .map(|appointment| {
                appointment.status = status;
                appointment.clone()
            }))
    }

    async fn active_in_range(
        &self,
        range: TimeRange,
        employee_id: Option<Uuid>,
    ) -> SalonResult<Vec<Appointment>> {
        let mut found: Vec<Appointment> = self
            .appointments
            .lock()
            .unwrap()
            .iter()
            .filter(|appointment| appointment.status.occupies_slot())
            .filter(|appointment| range.start <= appointment.start_time && appointment.start_time < range.end)
            .filter(|appointment| employee_id.is_none_or(|id| appointment.employee_id == id))
            .cloned()
            .collect();
        found.sort_by_key(|appointment| appointment.start_time);
        Ok(found)
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn service(duration_minutes: i32, price: Decimal) -> Service {
    Service {
        id: Uuid::new_v4(),
        name: format!("Service {}min", duration_minutes),
        description: None,
        price,
        duration_minutes,
        active: true,
        created_at: Utc::now(),
    }
}

pub fn staff(name: &str, role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@salon.test", name.to_lowercase()),
        role,
        commission_percent: role.is_staff().then(|| Decimal::new(30, 0)),
        active: true,
        created_at: Utc::now(),
    }
}
