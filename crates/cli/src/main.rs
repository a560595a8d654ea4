use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use medrec_core::{
    DiagnosisService, Gender, NewPatient, NonEmptyText, Patient, PatientService,
};

#[derive(Parser)]
#[command(name = "medrec")]
#[command(about = "medrec patient record service CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients (non-sensitive view)
    List,
    /// Show a full patient record as JSON
    Show {
        /// Patient UUID
        id: Uuid,
    },
    /// Add a patient to the in-memory store and print the stored record
    Add {
        /// Patient name
        name: String,
        /// Date of birth (YYYY-MM-DD)
        date_of_birth: NaiveDate,
        /// Social security number
        ssn: String,
        /// Gender
        #[arg(value_enum)]
        gender: GenderArg,
        /// Occupation
        occupation: String,
    },
    /// List all diagnosis codes
    Diagnoses,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => {
            let service = PatientService::seeded()?;
            for patient in service.list_non_sensitive() {
                println!(
                    "ID: {}, Name: {}, Born: {}, Occupation: {}",
                    patient.id, patient.name, patient.date_of_birth, patient.occupation
                );
            }
        }
        Some(Commands::Show { id }) => {
            let service = PatientService::seeded()?;
            match service.get(id) {
                Some(patient) => print_patient(&patient)?,
                None => println!("No patient found with id {id}"),
            }
        }
        Some(Commands::Add {
            name,
            date_of_birth,
            ssn,
            gender,
            occupation,
        }) => {
            let service = PatientService::seeded()?;
            let patient = service.add(NewPatient {
                name: NonEmptyText::new(name)?,
                date_of_birth,
                ssn: NonEmptyText::new(ssn)?,
                gender: gender.into(),
                occupation: NonEmptyText::new(occupation)?,
                entries: vec![],
            });
            print_patient(&patient)?;
        }
        Some(Commands::Diagnoses) => {
            let service = DiagnosisService::seeded()?;
            for diagnosis in service.list() {
                match diagnosis.latin {
                    Some(latin) => println!("{}  {} ({})", diagnosis.code, diagnosis.name, latin),
                    None => println!("{}  {}", diagnosis.code, diagnosis.name),
                }
            }
        }
        None => {
            println!("medrec patient record service; try `medrec list`");
        }
    }

    Ok(())
}

fn print_patient(patient: &Patient) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(patient)?);
    Ok(())
}
