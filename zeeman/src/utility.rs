use std::{
    fs::{File, create_dir_all},
    io::Write,
};

/// Saves sublevel energies sampled over a field sweep as a tab separated
/// file under `data/`, one row per field value.
pub fn save_spectrum(
    header: &str,
    filename: &str,
    mag_fields: &[f64],
    energies: &[Vec<f64>],
) -> Result<(), std::io::Error> {
    assert_eq!(
        mag_fields.len(),
        energies.len(),
        "fields and energies have to have the same length"
    );

    let mut path = std::env::current_dir()?;
    path.push("data");
    path.push(filename);
    path.set_extension("dat");

    let mut buf = header.to_string();
    for (mag_field, row) in mag_fields.iter().zip(energies.iter()) {
        let line = row
            .iter()
            .fold(format!("{:e}", mag_field), |s, val| s + &format!("\t{:e}", val));

        buf.push_str(&format!("\n{line}"))
    }

    if let Some(dir) = path.parent() {
        if !dir.exists() {
            create_dir_all(dir)?;
            println!("created path {}", dir.display());
        }
    }

    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(())
}
