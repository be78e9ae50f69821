use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy station fixture CSVs to OUT_DIR for include_str
    let fixtures = [
        (
            "baseline.csv",
            "variable,station_db_id,station_name,lat,lon,elevation,month,datum\n",
        ),
        (
            "monthly.csv",
            "variable,station_db_id,station_name,lat,lon,elevation,year,month,statistic\n",
        ),
    ];
    for (name, header) in fixtures {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, dest).unwrap();
        } else {
            fs::write(dest, header).unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{}", name);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
