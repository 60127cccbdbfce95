mod os_signal_termination;
mod parsers;
mod result;

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use bnb_core::branching::Subproblem;
use bnb_core::convert_case::Case;
use bnb_core::statistics::configure_statistic_logging;
use bnb_core::termination::Combinator;
use bnb_core::termination::TerminationCondition;
use bnb_core::termination::TimeBudget;
use bnb_core::Scheme;
use bnb_core::SchemeOptions;
use bnb_core::SearchLevel;
use bnb_encodings::Colouring;
use bnb_encodings::Graph;
use bnb_encodings::Knapsack;
use bnb_encodings::KnapsackObjective;
use bnb_encodings::MaxCut;
use bnb_encodings::StableSet;
use clap::Parser;
use clap::ValueEnum;
use itertools::Itertools;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use parsers::parse_graph;
use parsers::parse_knapsack;
use result::BnbError;
use result::BnbResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to solve. Graph problems read lines of the form
    ///  - 'p <kind> <vertices> <edges>' followed by
    ///  - 'e <u> <v> [weight]' with 1-based endpoints,
    /// and knapsack problems read lines of the form
    ///  - 'k <capacity>' and
    ///  - 'i <value> <weight>'.
    /// Lines starting with 'c' are comments.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The problem which is encoded by the instance.
    #[arg(short = 'p', long, value_enum)]
    problem: ProblemKind,

    /// How thoroughly to search.
    #[arg(long, value_enum, default_value_t)]
    level: SearchLevel,

    /// The numerical tolerance of the bound comparisons.
    ///
    /// Possible values: f64 in [0, 1)
    #[arg(long, default_value_t = 1e-6, verbatim_doc_comment)]
    epsilon: f64,

    /// The ceiling on the number of unexplored nodes; the search stops once it is reached.
    ///
    /// Possible values: usize, at least 3
    #[arg(long = "max-nodes", default_value_t = 100_000, verbatim_doc_comment)]
    max_nodes: usize,

    /// The maximum number of iterations of the search.
    ///
    /// Possible values: u64
    #[arg(long = "max-iterations", verbatim_doc_comment)]
    max_iterations: Option<u64>,

    /// A known objective value; only solutions which improve on it are reported.
    #[arg(long)]
    bound: Option<f64>,

    /// The number of available colours when colouring a graph. Defaults to the number of
    /// vertices.
    #[arg(long = "colours")]
    colours: Option<usize>,

    /// The number of milliseconds the solver is given to find and prove an optimal solution.
    ///
    /// Possible values: u64
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// Enables log message output from the solver
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ProblemKind {
    /// Maximise the value of the selected items.
    Knapsack,
    /// Minimise the value of the items which are left out.
    UnusedValueKnapsack,
    /// Maximise the weight of the edges between two sides.
    MaxCut,
    /// Maximise the number of pairwise non-adjacent vertices.
    StableSet,
    /// Minimise the number of colours.
    Colouring,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c stat", None, Some(Case::Snake), None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> BnbResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if bnb_core::asserts::BNB_ASSERT_LEVEL_DEFINITION >= bnb_core::asserts::BNB_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            bnb_core::asserts::BNB_ASSERT_LEVEL_DEFINITION
        );
    };

    let options = SchemeOptions {
        epsilon: args.epsilon,
        max_nodes: args.max_nodes,
        max_iterations: args.max_iterations.unwrap_or(u64::MAX),
        level: args.level,
    };
    options.validate()?;

    let file = File::open(&args.instance_path)
        .map_err(|_| BnbError::invalid_instance(args.instance_path.display()))?;
    let source = BufReader::new(file);

    let time_budget = args
        .time_limit
        .map(|milliseconds| TimeBudget::starting_now(Duration::from_millis(milliseconds)));
    let mut termination = Combinator::new(OsSignal::install(), time_budget);

    let runner = SolveRun {
        options,
        bound: args.bound,
        log_statistics: args.log_statistics,
    };

    match args.problem {
        ProblemKind::Knapsack | ProblemKind::UnusedValueKnapsack => {
            let objective = if args.problem == ProblemKind::Knapsack {
                KnapsackObjective::SelectedValue
            } else {
                KnapsackObjective::UnusedValue
            };
            let instance = Rc::new(parse_knapsack(source)?);
            runner.solve(
                Knapsack::new(instance, objective),
                &mut termination,
                |selected| indices_of_selected(selected),
            );
        }
        ProblemKind::MaxCut => {
            let graph = read_graph(source)?;
            runner.solve(MaxCut::new(graph), &mut termination, |sides| {
                sides.iter().map(|side| u8::from(*side)).join(" ")
            });
        }
        ProblemKind::StableSet => {
            let graph = read_graph(source)?;
            runner.solve(StableSet::new(graph), &mut termination, |members| {
                indices_of_selected(members)
            });
        }
        ProblemKind::Colouring => {
            let graph = read_graph(source)?;
            let colours = args.colours.unwrap_or(graph.num_vertices());
            runner.solve(Colouring::new(graph, colours)?, &mut termination, |colours| {
                colours.iter().map(|colour| colour + 1).join(" ")
            });
        }
    }

    Ok(())
}

fn read_graph(source: BufReader<File>) -> BnbResult<Rc<Graph>> {
    Ok(Rc::new(parse_graph(source)?))
}

/// The 1-based positions of the selected entries.
fn indices_of_selected(selected: &[bool]) -> String {
    selected
        .iter()
        .enumerate()
        .filter(|(_, selected)| **selected)
        .map(|(index, _)| index + 1)
        .join(" ")
}

/// The settings shared by the searches of all problem kinds.
#[derive(Debug, Clone, Copy)]
struct SolveRun {
    options: SchemeOptions,
    bound: Option<f64>,
    log_statistics: bool,
}

impl SolveRun {
    /// Runs the search and prints the result in the form
    ///  - `s <status>`
    ///  - `o <objective>` if a solution was found
    ///  - `b <best bound>`
    ///  - `v <solution>` if a solution was found
    fn solve<S: Subproblem>(
        self,
        root: S,
        termination: &mut impl TerminationCondition,
        describe: impl FnOnce(&S::Solution) -> String,
    ) {
        let scheme = match self.bound {
            Some(bound) => Scheme::with_bound(root, bound, self.options),
            None => Scheme::new(root, self.options),
        };
        let result = scheme.optimise(termination);

        if self.log_statistics {
            result.log_statistics();
        }

        println!("s {}", result.status);
        if result.has_solution() {
            println!("o {}", result.saved_objective);
        }
        println!("b {}", result.best_bound);
        if let Some(solution) = result.solution.as_ref() {
            println!("v {}", describe(solution));
        }
    }
}
