pub fn init_logger() {
	let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
		.is_test(true)
		.try_init();
}

pub fn run_with_logger(f: impl FnOnce() -> Result<(), anyhow::Error>) -> Result<(), anyhow::Error> {
	init_logger();
	f()
}
