use std::{
    fs::{File, create_dir_all},
    io::Write,
    path::PathBuf,
};

use serde::Serialize;

pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }

    let mut result = Vec::with_capacity(n);
    let step = (end - start) / (n as f64 - 1.0);

    for i in 0..n {
        result.push(start + (i as f64) * step);
    }

    result
}

fn data_path(filename: &str, extension: &str) -> Result<PathBuf, std::io::Error> {
    let mut path = std::env::current_dir()?;
    path.push("data");
    path.push(filename);
    path.set_extension(extension);

    if let Some(dir) = path.parent() {
        if !dir.exists() {
            create_dir_all(dir)?;
            println!("created path {}", dir.display());
        }
    }

    Ok(path)
}

/// Saves columns of data as a tab separated file under `data/`.
pub fn save_data(filename: &str, header: &str, data: &[Vec<f64>]) -> Result<(), std::io::Error> {
    let n = data.first().map_or(0, |column| column.len());
    for column in data {
        assert!(column.len() == n, "same length columns allowed only")
    }

    let mut buf = header.to_string();
    for i in 0..n {
        let line = data
            .iter()
            .fold(String::new(), |s, column| s + &format!("\t{:e}", column[i]));

        buf.push_str(&format!("\n{}", line.trim()));
    }

    let path = data_path(filename, "dat")?;
    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(())
}

/// Saves a serializable value as a json file under `data/`.
pub fn save_serialize(filename: &str, data: &impl Serialize) -> Result<(), std::io::Error> {
    let buf = serde_json::to_string(data)?;

    let path = data_path(filename, "json")?;
    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(())
}
