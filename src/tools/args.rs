/// Retrieve the value of the first arg named after any of `arg_names`, such as `--port=8000`.
pub fn retrieve_arg_value<'a>(args: &'a [String], arg_names: &[&str]) -> Option<&'a str> {
    args.iter().find_map(|arg| {
        arg_names.iter().find_map(|arg_name| {
            arg.strip_prefix(arg_name)
                .and_then(|rest| rest.strip_prefix('='))
        })
    })
}
