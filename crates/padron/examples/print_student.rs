//! Thin demonstration entry point: create one record and print its
//! serialized form, or an error line if either step fails.

use padron::prelude::*;

fn main() {
    let mut store = PoolStore::new();

    let handle = match store.create("Natalia", "Borbon", 42935757) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("Error creando el alumno: {err}");
            std::process::exit(1);
        }
    };

    let mut buf = [0u8; 100];
    let student = store.get(handle).expect("handle was just issued");
    match serialize_student(student, &mut buf) {
        Ok(written) => {
            let json = std::str::from_utf8(&buf[..written]).expect("output is ASCII");
            println!("Serializado: {json}");
        }
        Err(err) => eprintln!("Error al serializar: {err}"),
    }
}
