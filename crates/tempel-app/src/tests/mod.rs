mod support;

mod result_action_tests;
