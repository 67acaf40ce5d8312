mod audio_buffer_test;
mod model_source_test;
mod storage_path_test;
