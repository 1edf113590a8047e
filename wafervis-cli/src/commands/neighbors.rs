//! Neighbors command implementation - inspect the grid around one unit

use anyhow::{bail, Result};

use wafervis_core::{neighborhood, Direction, GridTopology, UnitIndex, WaferGrid};

use crate::config::Config;

pub fn execute(config: &Config, unit: UnitIndex) -> Result<()> {
    let grid = config.build_grid()?;
    println!("{}", report(&grid, unit)?);
    Ok(())
}

fn report(grid: &WaferGrid, unit: UnitIndex) -> Result<String> {
    let Some(pos) = grid.position(unit) else {
        bail!("unit {} is outside the grid range {}", unit, grid.index_range());
    };

    let mut lines = vec![format!("unit {} at {}", unit, pos)];
    for direction in Direction::ALL {
        let neighbor = grid
            .neighbor(unit, direction)
            .map_or_else(|| "-".to_string(), |index| index.to_string());
        lines.push(format!("  {:<6} {}", direction.as_str(), neighbor));
    }
    lines.push(format!("  detail {:?}", neighborhood(grid, unit).as_slice()));
    Ok(lines.join("\n"))
}
