use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use meditrack_core::{HospitalService, NewPatient, Urgency};

#[derive(Parser)]
#[command(name = "meditrack")]
#[command(about = "MediTrack Lite hospital management CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    ListPatients,
    /// List all appointments
    ListAppointments,
    /// List all rooms
    ListRooms,
    /// Add a patient to the seeded store
    AddPatient {
        /// Patient name
        name: String,
        /// Date of birth (YYYY-MM-DD)
        date_of_birth: NaiveDate,
        /// Admission date (YYYY-MM-DD)
        admission_date: NaiveDate,
        /// Triage urgency: High, Medium or Low
        #[arg(long, default_value = "Medium")]
        urgency: String,
        /// Diagnosis (optional)
        #[arg(long)]
        diagnosis: Option<String>,
        /// Free-text notes (optional)
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an appointment by id
    DeleteAppointment {
        /// Appointment id
        id: String,
    },
}

// The store is in-memory and volatile: every invocation starts from the
// seeded dataset, so mutations demonstrate the actions rather than persist.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let hospital = HospitalService::seeded();

    match cli.command {
        Some(Commands::ListPatients) => {
            for patient in hospital.patients.list() {
                println!(
                    "ID: {}, Name: {}, Urgency: {:?}, Flagged: {}",
                    patient.id, patient.name, patient.urgency, patient.is_flagged
                );
            }
        }
        Some(Commands::ListAppointments) => {
            for appointment in hospital.appointments.list() {
                println!(
                    "ID: {}, {} with {} at {}, Status: {:?}",
                    appointment.id,
                    appointment.patient_name,
                    appointment.doctor_name,
                    appointment.date_time,
                    appointment.status
                );
            }
        }
        Some(Commands::ListRooms) => {
            for room in hospital.rooms.list() {
                let occupant = room.patient_name.as_deref().unwrap_or("-");
                println!(
                    "ID: {}, Room: {}, Occupied: {}, Occupant: {}",
                    room.id, room.room_number, room.is_occupied, occupant
                );
            }
        }
        Some(Commands::AddPatient {
            name,
            date_of_birth,
            admission_date,
            urgency,
            diagnosis,
            notes,
        }) => {
            let input = NewPatient {
                name,
                date_of_birth,
                admission_date,
                urgency: urgency.parse::<Urgency>()?,
                is_flagged: false,
                room_number: None,
                diagnosis,
                notes,
            };
            match hospital.patients.add(input) {
                Ok(patient) => println!("Created patient with ID: {}", patient.id),
                Err(e) => eprintln!("Error creating patient: {e}"),
            }
        }
        Some(Commands::DeleteAppointment { id }) => match hospital.appointments.delete(&id) {
            Ok(()) => println!("Deleted appointment {id}"),
            Err(e) => eprintln!("Error deleting appointment: {e}"),
        },
        None => {
            println!("No command provided. Try --help.");
        }
    }

    Ok(())
}
