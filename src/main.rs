// SPDX-License-Identifier: MPL-2.0
use iced_feed::app::{self, Flags};
use iced_feed::config::paths;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        server: args.opt_value_from_str("--server").unwrap(),
        user_id: args.opt_value_from_str("--user-id").unwrap(),
        username: args.opt_value_from_str("--username").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
