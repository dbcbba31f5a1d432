use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use log::LevelFilter;

use densemat::Matrix;

fn size_arg() -> Arg {
    Arg::new("size")
        .short('n')
        .long("size")
        .help("Dimension of the square elementary matrix")
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

fn factor_arg() -> Arg {
    Arg::new("factor")
        .short('f')
        .long("factor")
        .help("Scalar factor")
        .required(true)
        .value_parser(clap::value_parser!(f64))
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSEMAT_LOG", "error,densemat=info"))
        .init();

    let matches = Command::new("densemat")
        .version(clap::crate_version!())
        .about("Demonstrations of the densemat dense-matrix type")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("showcase")
                .about("Build a sample matrix and walk through the core operations"),
        )
        .subcommand(
            Command::new("elementary")
                .about("Print an elementary matrix and its effect on a sample matrix")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("swap")
                        .about("Elementary matrix that swaps two rows")
                        .arg(size_arg())
                        .arg(
                            Arg::new("first")
                                .short('i')
                                .long("first")
                                .help("First row to swap")
                                .required(true)
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("second")
                                .short('j')
                                .long("second")
                                .help("Second row to swap")
                                .required(true)
                                .value_parser(clap::value_parser!(usize)),
                        ),
                )
                .subcommand(
                    Command::new("scale")
                        .about("Elementary matrix that scales one row")
                        .arg(size_arg())
                        .arg(
                            Arg::new("row")
                                .short('r')
                                .long("row")
                                .help("Row to scale")
                                .required(true)
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(factor_arg()),
                )
                .subcommand(
                    Command::new("add")
                        .about("Elementary matrix that adds a scaled row into another")
                        .arg(size_arg())
                        .arg(
                            Arg::new("src")
                                .short('s')
                                .long("src")
                                .help("Source row")
                                .required(true)
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("dest")
                                .short('d')
                                .long("dest")
                                .help("Destination row")
                                .required(true)
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(factor_arg()),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("showcase", _)) => showcase(),
        Some(("elementary", sub)) => elementary(sub),
        _ => unreachable!(),
    }
}

fn showcase() -> Result<()> {
    let a = Matrix::from_shape_vec(
        (3, 3),
        vec![2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0],
    )?;
    log::info!("built a {}x{} sample matrix", a.nrows(), a.ncols());

    println!("Matrix A:\n{}", a);
    println!("A transposed:\n{}", a.transpose());
    println!("A + A:\n{}", a.add(&a)?);
    println!("A * A:\n{}", a.mat_mul(&a)?);

    let mut m = a.clone();
    m.swap_rows(0, 1)?;
    m.scale_row(0, -1.0)?;
    m.add_scaled_row(0, 1, -2.0)?;
    println!(
        "A after swap(0, 1), scale(0, -1), add_scaled(0 -> 1, -2):\n{}",
        m
    );

    Ok(())
}

fn elementary(matches: &ArgMatches) -> Result<()> {
    let (label, e) = match matches.subcommand() {
        Some(("swap", m)) => {
            let n = *m.get_one::<usize>("size").unwrap();
            let i = *m.get_one::<usize>("first").unwrap();
            let j = *m.get_one::<usize>("second").unwrap();
            log::info!("building {}x{} row-swap matrix", n, n);
            (
                format!("swap rows {} and {}", i, j),
                Matrix::<f64>::row_swap_matrix(n, i, j)?,
            )
        }
        Some(("scale", m)) => {
            let n = *m.get_one::<usize>("size").unwrap();
            let row = *m.get_one::<usize>("row").unwrap();
            let factor = *m.get_one::<f64>("factor").unwrap();
            log::info!("building {}x{} row-scale matrix", n, n);
            (
                format!("scale row {} by {}", row, factor),
                Matrix::row_scale_matrix(n, row, factor)?,
            )
        }
        Some(("add", m)) => {
            let n = *m.get_one::<usize>("size").unwrap();
            let src = *m.get_one::<usize>("src").unwrap();
            let dest = *m.get_one::<usize>("dest").unwrap();
            let factor = *m.get_one::<f64>("factor").unwrap();
            log::info!("building {}x{} row-add matrix", n, n);
            (
                format!("add {} * row {} into row {}", factor, src, dest),
                Matrix::row_add_matrix(n, src, dest, factor)?,
            )
        }
        _ => unreachable!(),
    };

    println!("Elementary matrix ({}):\n{}", label, e);

    let n = e.nrows();
    let sample = Matrix::from_fn(n, n, |i, j| (i * n + j) as f64);
    println!("Sample matrix M:\n{}", sample);
    println!("E * M:\n{}", e.mat_mul(&sample)?);

    Ok(())
}
