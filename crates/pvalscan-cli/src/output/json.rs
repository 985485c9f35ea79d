use pvalscan_core::error::PvalError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), PvalError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
