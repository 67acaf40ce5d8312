mod remote_engine_test;
