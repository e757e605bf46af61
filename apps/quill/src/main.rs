use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = quill::Args::parse();
	quill::run(args).await
}
