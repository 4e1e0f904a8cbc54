use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Name of the index that keeps two live appointments of one employee from
/// sharing a start time.
pub const APPOINTMENT_SLOT_INDEX: &str = "idx_appointments_employee_start_active";

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL,
        role VARCHAR(16) NOT NULL DEFAULT 'client',
        commission_percent NUMERIC(5, 2) NULL,
        active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_role CHECK (role IN ('client', 'employee', 'admin')),
        CONSTRAINT valid_commission CHECK (commission_percent BETWEEN 0 AND 100)
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS services (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name VARCHAR(255) NOT NULL,
        description TEXT NULL,
        price NUMERIC(10, 2) NOT NULL,
        duration_minutes INTEGER NOT NULL,
        active BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_duration CHECK (duration_minutes BETWEEN 1 AND 1440),
        CONSTRAINT valid_price CHECK (price >= 0)
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name VARCHAR(255) NOT NULL,
        quantity INTEGER NOT NULL,
        price NUMERIC(10, 2) NOT NULL DEFAULT 0,
        unit VARCHAR(32) NOT NULL DEFAULT 'un',
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT non_negative_stock CHECK (quantity >= 0)
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS appointments (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        client_name VARCHAR(255) NOT NULL,
        service_id UUID NOT NULL REFERENCES services(id),
        employee_id UUID NOT NULL REFERENCES users(id) ON DELETE RESTRICT,
        start_time TIMESTAMP NOT NULL,
        end_time TIMESTAMP NOT NULL,
        status VARCHAR(16) NOT NULL DEFAULT 'agendado',
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
        CONSTRAINT valid_time_range CHECK (
            end_time > start_time AND end_time <= start_time + INTERVAL '1440 minutes'
        ),
        CONSTRAINT valid_status CHECK (status IN ('agendado', 'concluido', 'cancelado'))
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sessions (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        secret_hash VARCHAR(255) NOT NULL,
        expires_at TIMESTAMP WITH TIME ZONE NOT NULL,
        created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
    );
    "#,
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_employee_start_active
        ON appointments(employee_id, start_time)
        WHERE status <> 'cancelado';
    "#,
    "CREATE INDEX IF NOT EXISTS idx_appointments_start_time ON appointments(start_time);",
    "CREATE INDEX IF NOT EXISTS idx_appointments_employee_id ON appointments(employee_id);",
    "CREATE INDEX IF NOT EXISTS idx_services_active ON services(active);",
    "CREATE INDEX IF NOT EXISTS idx_sessions_user_id ON sessions(user_id);",
    "CREATE INDEX IF NOT EXISTS idx_sessions_expires_at ON sessions(expires_at);",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
