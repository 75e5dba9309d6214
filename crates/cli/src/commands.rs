use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert CHECK constraints in a DDL file into BEFORE INSERT triggers
    Transform {
        #[arg(help = "Path to target DDL SQL file")]
        input: String,

        #[arg(help = "Path to output processed DDL SQL file")]
        output: String,

        #[arg(
            short,
            long,
            help = "Emit one function/trigger pair per constraint instead of one per table"
        )]
        split: bool,
    },
    /// Compare insert performance between two DDL variants
    Analyze {
        #[arg(help = "Path to DDL SQL file with native CHECK constraints")]
        check_ddl: String,

        #[arg(help = "Path to DDL SQL file with synthesized triggers")]
        trigger_ddl: String,

        #[arg(help = "Path to DML SQL file to run against both variants")]
        dml: String,

        #[arg(long, help = "Database host")]
        db_host: String,

        #[arg(long, help = "Database name")]
        db_name: String,

        #[arg(long, help = "Database username")]
        db_user: String,

        #[arg(long, help = "Database password")]
        db_password: String,

        #[arg(
            long,
            help = "If set, prints the comparison as JSON instead of a table"
        )]
        json: bool,

        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,
    },
}
