mod test_command;
