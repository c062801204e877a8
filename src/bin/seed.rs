//! Fills the database with a reproducible demo data set.
//!
//! All records are written through the service layer, so enrollments are recorded on both
//! sides and every exam carries a snapshot of its module.

use std::collections::HashSet;

use clap::Parser;
use gestione_corsi::server::{
    config::Config,
    error::AppError,
    model::{exam::ExamFields, module::ModuleFields, student::StudentFields},
    service::{
        enrollment::EnrollmentSynchronizer, exam::ExamService, module::ModuleService,
        student::StudentService,
    },
    startup,
};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use sea_orm::{DatabaseConnection, EntityTrait};

const MODULE_CATALOGUE: [(&str, &str, i32); 8] = [
    ("ITS-PYT", "Programmazione Python", 80),
    ("ITS-WEB", "Sviluppo Web Frontend", 60),
    ("ITS-BCK", "Sviluppo Web Backend", 80),
    ("ITS-DBA", "Database e SQL", 60),
    ("ITS-LNX", "Sistemi Operativi Linux", 50),
    ("ITS-CBR", "Cybersecurity Fondamenti", 70),
    ("ITS-MLA", "Machine Learning e AI", 90),
    ("ITS-NET", "Networking e Sistemi", 50),
];

const FIRST_NAMES: [&str; 20] = [
    "Marco", "Giulia", "Luca", "Francesca", "Alessandro", "Chiara", "Matteo", "Sara",
    "Lorenzo", "Martina", "Davide", "Elena", "Niccolò", "Federica", "Andrea", "Alice",
    "Simone", "Beatrice", "Gabriele", "Noemi",
];

const LAST_NAMES: [&str; 20] = [
    "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci",
    "Marino", "Greco", "Bruno", "Gallo", "Conti", "De Luca", "Mancini", "Costa",
    "Giordano", "Rizzo", "Lombardi", "Moretti",
];

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Reset the registry and fill it with demo modules, students and exams")]
struct Args {
    /// Number of students to generate
    #[arg(short, long, default_value_t = 30)]
    students: usize,

    /// Seed for the pseudo-random generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Only empty the three stores, then exit
    #[arg(long)]
    reset_only: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    reset(&db).await?;
    if args.reset_only {
        tracing::info!("Stores emptied, nothing seeded");
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(args.seed);

    let modules = create_modules(&db).await?;
    let students = create_students(&db, &mut rng, args.students).await?;
    let exams = enroll_and_examine(&db, &mut rng, &modules, &students).await?;

    tracing::info!(
        modules = modules.len(),
        students = students.len(),
        exams,
        "Seeding complete"
    );

    db.close().await?;

    Ok(())
}

async fn reset(db: &DatabaseConnection) -> Result<(), AppError> {
    let exams = entity::prelude::Exam::delete_many().exec(db).await?;
    let students = entity::prelude::Student::delete_many().exec(db).await?;
    let modules = entity::prelude::Module::delete_many().exec(db).await?;

    tracing::info!(
        modules = modules.rows_affected,
        students = students.rows_affected,
        exams = exams.rows_affected,
        "Emptied stores"
    );

    Ok(())
}

async fn create_modules(
    db: &DatabaseConnection,
) -> Result<Vec<gestione_corsi::server::model::module::Module>, AppError> {
    let service = ModuleService::new(db);
    let mut created = Vec::with_capacity(MODULE_CATALOGUE.len());

    for (codice, nome, ore_totali) in MODULE_CATALOGUE {
        let module = service
            .create(ModuleFields {
                nome: nome.to_string(),
                codice: codice.to_string(),
                ore_totali,
                descrizione: format!("Modulo ITS: {}", nome),
            })
            .await?;

        tracing::debug!(codice, nome, ore_totali, "Created module");
        created.push(module);
    }

    Ok(created)
}

async fn create_students(
    db: &DatabaseConnection,
    rng: &mut StdRng,
    count: usize,
) -> Result<Vec<gestione_corsi::server::model::student::Student>, AppError> {
    let service = StudentService::new(db);
    let mut emails = HashSet::new();
    let mut created = Vec::with_capacity(count);

    for _ in 0..count {
        let nome = FIRST_NAMES.choose(rng).copied().unwrap_or("Mario");
        let cognome = LAST_NAMES.choose(rng).copied().unwrap_or("Rossi");

        let local = format!("{}.{}", email_local_part(nome), email_local_part(cognome));
        let mut email = format!("{}@its.edu", local);
        let mut suffix = 2;
        while !emails.insert(email.clone()) {
            email = format!("{}{}@its.edu", local, suffix);
            suffix += 1;
        }

        let student = service
            .create(StudentFields {
                nome: nome.to_string(),
                cognome: cognome.to_string(),
                email,
            })
            .await?;
        created.push(student);
    }

    Ok(created)
}

/// Enrolls every student in 3 to 6 modules and records one exam per enrollment.
async fn enroll_and_examine(
    db: &DatabaseConnection,
    rng: &mut StdRng,
    modules: &[gestione_corsi::server::model::module::Module],
    students: &[gestione_corsi::server::model::student::Student],
) -> Result<usize, AppError> {
    let sync = EnrollmentSynchronizer::new(db);
    let exam_service = ExamService::new(db);
    let mut exams = 0;

    for student in students {
        let take = rng.random_range(3..=6).min(modules.len());

        for module in modules.choose_multiple(rng, take) {
            sync.assign(&student.id, &module.id).await?;

            let voto = exam_grade(rng);
            exam_service
                .create(ExamFields {
                    student_id: student.id.clone(),
                    module_id: module.id.clone(),
                    data: school_year_date(rng),
                    voto,
                    note: exam_note(voto, &module.nome),
                })
                .await?;
            exams += 1;
        }
    }

    Ok(exams)
}

/// Lowercase ASCII form of a name, spaces turned into dots and accents dropped.
fn email_local_part(text: &str) -> String {
    let mut out = String::new();
    for ch in text.trim().to_lowercase().chars() {
        match ch {
            'a'..='z' | '0'..='9' => out.push(ch),
            'à' | 'á' => out.push('a'),
            'è' | 'é' => out.push('e'),
            'ì' | 'í' => out.push('i'),
            'ò' | 'ó' => out.push('o'),
            'ù' | 'ú' => out.push('u'),
            ' ' | '.' if !out.ends_with('.') => out.push('.'),
            _ => {}
        }
    }

    out.trim_matches('.').to_string()
}

/// Grade 18 to 30: a quarter in 18–20, 35% in 21–23, a quarter in 24–26, the rest above.
fn exam_grade(rng: &mut StdRng) -> i32 {
    let r: f64 = rng.random();
    if r <= 0.25 {
        rng.random_range(18..=20)
    } else if r <= 0.60 {
        rng.random_range(21..=23)
    } else if r <= 0.85 {
        rng.random_range(24..=26)
    } else {
        rng.random_range(27..=30)
    }
}

/// A date in the October 2024 to June 2025 school year.
fn school_year_date(rng: &mut StdRng) -> String {
    let month: u32 = *[10, 11, 12, 1, 2, 3, 4, 5, 6].choose(rng).unwrap_or(&1);
    let year = if month >= 10 { 2024 } else { 2025 };
    let day: u32 = rng.random_range(5..=25);

    format!("{:04}-{:02}-{:02}", year, month, day)
}

fn exam_note(voto: i32, modulo: &str) -> String {
    match voto {
        i32::MIN..=20 => format!(
            "Difficoltà nel modulo {}. Comprensione parziale dei concetti fondamentali.",
            modulo
        ),
        21..=23 => format!(
            "Prova sufficiente nel modulo {}. La parte pratica deve migliorare.",
            modulo
        ),
        24..=26 => format!(
            "Buona prova nel modulo {}. Esercizi svolti con autonomia.",
            modulo
        ),
        27..=28 => format!(
            "Prova molto buona nel modulo {}. Ottima padronanza degli argomenti.",
            modulo
        ),
        _ => format!(
            "Risultato eccellente nel modulo {}. Comprensione avanzata degli argomenti.",
            modulo
        ),
    }
}
